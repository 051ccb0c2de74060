/// Cube wireframe built from two depth-offset squares
use nalgebra::{Point2, Point3};

use super::DrawError;
use crate::projection::Perspective;
use crate::render::{LineSink, LineStyle};
use crate::rotation::{rotate, Orientation};

#[derive(Debug, Clone, Copy)]
pub struct CubeSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub size: f32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
}

/// Draw a cube of `size` centered at (`center`, `z`).
///
/// The front and back faces are kept as 2D squares with a parallel array
/// of per-corner depths; rotation adjusts the depths relative to the cube
/// center before turning the corners and restores them after. 12 edges.
pub fn draw(
    spec: &CubeSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec.style.ok_or(DrawError::MissingStyle { shape: "cube" })?;
    if spec.size <= 0.0 {
        return Err(DrawError::Degenerate { shape: "cube" });
    }

    sink.begin_lines(style);

    let half = spec.size * 0.5;
    let mut front = square(half);
    let mut front_z = [spec.z + half; 4];
    let mut back = square(half);
    let mut back_z = [spec.z - half; 4];

    rotate_square(&mut front, &mut front_z, spec);
    rotate_square(&mut back, &mut back_z, spec);

    let computed_front = emit_square(&front, &front_z, camera, sink);
    let computed_back = emit_square(&back, &back_z, camera, sink);

    // connecting edges between matching corners
    for i in 0..4 {
        sink.vertex2(computed_front[i]);
        sink.vertex2(computed_back[i]);
    }

    sink.end_lines();
    Ok(())
}

fn square(half: f32) -> [Point2<f32>; 4] {
    [
        Point2::new(half, half),
        Point2::new(-half, half),
        Point2::new(-half, -half),
        Point2::new(half, -half),
    ]
}

/// Rotate a face about the cube center, carrying each corner's depth
/// through the rotation so asymmetric turns keep correct depth ordering
fn rotate_square(corners: &mut [Point2<f32>; 4], depths: &mut [f32; 4], spec: &CubeSpec) {
    let center = Point3::new(spec.center.x, spec.center.y, spec.z);

    for i in 0..4 {
        let p = Point3::new(corners[i].x, corners[i].y, depths[i] - center.z);
        let p = rotate(p, &spec.orientation);

        corners[i] = Point2::new(p.x + center.x, p.y + center.y);
        depths[i] = p.z + center.z;
    }
}

/// Project a face and emit its perimeter, returning the projected corners
/// so the caller can draw the connecting edges
fn emit_square(
    corners: &[Point2<f32>; 4],
    depths: &[f32; 4],
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> [Point2<f32>; 4] {
    let mut computed = [Point2::origin(); 4];

    for i in 0..4 {
        let scale = camera.scale_at(depths[i]);
        computed[i] = Point2::new(corners[i].x * scale, corners[i].y * scale);

        let next = (i + 1) % 4;
        let next_scale = camera.scale_at(depths[next]);

        sink.vertex2(computed[i]);
        sink.vertex2(Point2::new(
            corners[next].x * next_scale,
            corners[next].y * next_scale,
        ));
    }

    computed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::PinholeCamera;
    use crate::render::testing::RecordingSink;
    use approx::assert_relative_eq;

    fn spec() -> CubeSpec {
        CubeSpec {
            center: Point2::new(0.0, 0.0),
            z: 0.0,
            size: 2.0,
            orientation: Orientation::zero(),
            style: Some(LineStyle::new(255, 255, 255)),
        }
    }

    #[test]
    fn test_cube_emits_twelve_edges() {
        let mut sink = RecordingSink::new();
        draw(&spec(), &PinholeCamera::new(10.0), &mut sink).unwrap();

        assert_eq!(sink.batches.len(), 1);
        assert_eq!(sink.segment_count(), 12);
    }

    #[test]
    fn test_missing_style_skips_draw() {
        let mut sink = RecordingSink::new();
        let result = draw(
            &CubeSpec {
                style: None,
                ..spec()
            },
            &PinholeCamera::new(10.0),
            &mut sink,
        );

        assert_eq!(result, Err(DrawError::MissingStyle { shape: "cube" }));
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_zero_size_is_degenerate() {
        let mut sink = RecordingSink::new();
        let result = draw(
            &CubeSpec {
                size: 0.0,
                ..spec()
            },
            &PinholeCamera::new(10.0),
            &mut sink,
        );

        assert_eq!(result, Err(DrawError::Degenerate { shape: "cube" }));
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_unrotated_faces_scale_with_depth() {
        let mut sink = RecordingSink::new();
        let camera = PinholeCamera::new(10.0);
        draw(&spec(), &camera, &mut sink).unwrap();

        // First emitted vertex is the front face's (+1, +1) corner at z = 1
        let front_scale = camera.scale_at(1.0);
        let first = sink.batches[0].vertices[0];
        assert_relative_eq!(first, Point2::new(front_scale, front_scale), epsilon = 1e-6);

        // Vertex 8 opens the back face perimeter at z = -1
        let back_scale = camera.scale_at(-1.0);
        let ninth = sink.batches[0].vertices[8];
        assert_relative_eq!(ninth, Point2::new(back_scale, back_scale), epsilon = 1e-6);
    }
}
