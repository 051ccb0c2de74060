/// Square-base pyramid wireframe
use nalgebra::{Point2, Point3};

use super::DrawError;
use crate::projection::{project, Perspective};
use crate::render::{LineSink, LineStyle};
use crate::rotation::{rotate, Orientation};

#[derive(Debug, Clone, Copy)]
pub struct PyramidSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub size: f32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
}

/// Draw a pyramid with its apex at +size/2 above the center and a square
/// base in the XZ plane at -size/2. 4 side edges + 4 base edges.
pub fn draw(
    spec: &PyramidSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec
        .style
        .ok_or(DrawError::MissingStyle { shape: "pyramid" })?;
    if spec.size <= 0.0 {
        return Err(DrawError::Degenerate { shape: "pyramid" });
    }

    sink.begin_lines(style);

    let half = spec.size * 0.5;
    let center = Point3::new(spec.center.x, spec.center.y, spec.z);

    let apex = Point3::new(0.0, half, 0.0);
    let base = [
        Point3::new(half, -half, half),
        Point3::new(-half, -half, half),
        Point3::new(-half, -half, -half),
        Point3::new(half, -half, -half),
    ];

    let world_apex = rotate(apex, &spec.orientation) + center.coords;
    let computed_apex = project(world_apex, camera);

    for i in 0..4 {
        let p1 = rotate(base[i], &spec.orientation) + center.coords;
        let p1 = project(p1, camera);

        // side edge
        sink.vertex2(computed_apex);
        sink.vertex2(p1);

        // base edge to the next corner
        let next = (i + 1) % 4;
        let p2 = rotate(base[next], &spec.orientation) + center.coords;
        let p2 = project(p2, camera);

        sink.vertex2(p1);
        sink.vertex2(p2);
    }

    sink.end_lines();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::PinholeCamera;
    use crate::render::testing::RecordingSink;
    use approx::assert_relative_eq;

    fn spec() -> PyramidSpec {
        PyramidSpec {
            center: Point2::new(0.0, 0.0),
            z: 0.0,
            size: 2.0,
            orientation: Orientation::zero(),
            style: Some(LineStyle::new(255, 0, 0)),
        }
    }

    #[test]
    fn test_pyramid_emits_eight_edges() {
        let mut sink = RecordingSink::new();
        draw(&spec(), &PinholeCamera::new(10.0), &mut sink).unwrap();

        assert_eq!(sink.batches.len(), 1);
        assert_eq!(sink.segment_count(), 8);
    }

    #[test]
    fn test_side_edges_start_at_apex() {
        let mut sink = RecordingSink::new();
        let camera = PinholeCamera::new(10.0);
        draw(&spec(), &camera, &mut sink).unwrap();

        // Unrotated apex sits at (0, 1, 0), projected straight up the Y axis
        let apex = Point2::new(0.0, 1.0 * camera.scale_at(0.0));
        let vertices = &sink.batches[0].vertices;
        for i in 0..4 {
            assert_relative_eq!(vertices[i * 4], apex, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_missing_style_skips_draw() {
        let mut sink = RecordingSink::new();
        let result = draw(
            &PyramidSpec {
                style: None,
                ..spec()
            },
            &PinholeCamera::new(10.0),
            &mut sink,
        );

        assert_eq!(result, Err(DrawError::MissingStyle { shape: "pyramid" }));
        assert!(sink.batches.is_empty());
    }
}
