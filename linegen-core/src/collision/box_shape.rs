/// Axis-aligned box used as the falling collision body
use nalgebra::{Point2, Point3, Vector3};

use crate::aabb::Aabb;
use crate::projection::Perspective;
use crate::render::{LineSink, LineStyle};
use crate::shapes::DrawError;

/// Box without rotation support; the wireframe stays axis-aligned so its
/// bounding volume is exact
#[derive(Debug, Clone, Copy)]
pub struct BoxSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub size: f32,
    pub style: Option<LineStyle>,
}

/// Bounding box from center and half-size on all three axes.
///
/// Pure function of the spec, valid whether or not a style is assigned.
pub fn bounding_box(spec: &BoxSpec) -> Aabb {
    let half = spec.size * 0.5;
    Aabb::from_center_half_extents(
        Point3::new(spec.center.x, spec.center.y, spec.z),
        Vector3::new(half, half, half),
    )
}

/// Draw the box wireframe.
///
/// Both faces share the box's XY footprint; the perspective scale is taken
/// from the face plane depth (`z` plus or minus half the size) rather than
/// per vertex. 12 edges.
pub fn draw(
    spec: &BoxSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec.style.ok_or(DrawError::MissingStyle { shape: "box" })?;
    if spec.size <= 0.0 {
        return Err(DrawError::Degenerate { shape: "box" });
    }

    sink.begin_lines(style);

    let half = spec.size * 0.5;
    let front = translated_square(half, spec.center);
    let back = translated_square(half, spec.center);

    let front_scale = camera.scale_at(spec.z + half);
    let back_scale = camera.scale_at(spec.z - half);

    let computed_front = emit_square(&front, front_scale, sink);
    let computed_back = emit_square(&back, back_scale, sink);

    // connecting edges
    for i in 0..4 {
        sink.vertex2(computed_front[i]);
        sink.vertex2(computed_back[i]);
    }

    sink.end_lines();
    Ok(())
}

fn translated_square(half: f32, center: Point2<f32>) -> [Point2<f32>; 4] {
    [
        Point2::new(center.x + half, center.y + half),
        Point2::new(center.x - half, center.y + half),
        Point2::new(center.x - half, center.y - half),
        Point2::new(center.x + half, center.y - half),
    ]
}

/// Scale a face uniformly and emit its perimeter, returning the scaled
/// corners for the connecting edges
fn emit_square(
    corners: &[Point2<f32>; 4],
    scale: f32,
    sink: &mut dyn LineSink,
) -> [Point2<f32>; 4] {
    let mut computed = [Point2::origin(); 4];

    for i in 0..4 {
        computed[i] = Point2::new(corners[i].x * scale, corners[i].y * scale);

        let next = (i + 1) % 4;
        sink.vertex2(computed[i]);
        sink.vertex2(Point2::new(corners[next].x * scale, corners[next].y * scale));
    }

    computed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::PinholeCamera;
    use crate::render::testing::RecordingSink;

    fn spec() -> BoxSpec {
        BoxSpec {
            center: Point2::new(0.0, 5.0),
            z: 0.0,
            size: 1.0,
            style: Some(LineStyle::new(255, 255, 255)),
        }
    }

    #[test]
    fn test_box_emits_twelve_edges() {
        let mut sink = RecordingSink::new();
        draw(&spec(), &PinholeCamera::new(10.0), &mut sink).unwrap();

        assert_eq!(sink.batches.len(), 1);
        assert_eq!(sink.segment_count(), 12);
    }

    #[test]
    fn test_bounding_box_from_center_and_size() {
        let aabb = bounding_box(&spec());
        assert_eq!(aabb.min, Point3::new(-0.5, 4.5, -0.5));
        assert_eq!(aabb.max, Point3::new(0.5, 5.5, 0.5));
    }

    #[test]
    fn test_bounding_box_ignores_missing_style() {
        let without_style = BoxSpec {
            style: None,
            ..spec()
        };
        assert_eq!(bounding_box(&without_style), bounding_box(&spec()));

        // The draw itself is still skipped
        let mut sink = RecordingSink::new();
        let result = draw(&without_style, &PinholeCamera::new(10.0), &mut sink);
        assert_eq!(result, Err(DrawError::MissingStyle { shape: "box" }));
        assert!(sink.batches.is_empty());
    }
}
