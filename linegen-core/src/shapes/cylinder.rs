/// Cylinder wireframe from two rings and vertical connectors
use nalgebra::{Point2, Point3, Vector3};
use std::f32::consts::TAU;

use super::DrawError;
use crate::projection::Perspective;
use crate::render::{LineSink, LineStyle};
use crate::rotation::{rotate, Orientation};

pub const DEFAULT_SEGMENTS: u32 = 32;

#[derive(Debug, Clone, Copy)]
pub struct CylinderSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
}

/// Draw a cylinder: top ring, bottom ring, then `segments` vertical
/// connectors, 3 * segments edges in total.
pub fn draw(
    spec: &CylinderSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec
        .style
        .ok_or(DrawError::MissingStyle { shape: "cylinder" })?;
    if spec.radius <= 0.0 || spec.height <= 0.0 || spec.segments == 0 {
        return Err(DrawError::Degenerate { shape: "cylinder" });
    }

    sink.begin_lines(style);

    let half_height = spec.height / 2.0;

    // top and bottom ring perimeters, one chord pair per segment
    for i in 0..spec.segments {
        let angle1 = (i as f32 / spec.segments as f32) * TAU;
        let angle2 = ((i + 1) as f32 / spec.segments as f32) * TAU;

        let top1 = ring_point(angle1, half_height, spec.radius);
        let top2 = ring_point(angle2, half_height, spec.radius);
        emit_projected(top1, top2, spec, camera, sink);

        let bottom1 = ring_point(angle1, -half_height, spec.radius);
        let bottom2 = ring_point(angle2, -half_height, spec.radius);
        emit_projected(bottom1, bottom2, spec, camera, sink);
    }

    // vertical connectors between the rings
    for i in 0..spec.segments {
        let angle = (i as f32 / spec.segments as f32) * TAU;

        let bottom = ring_point(angle, -half_height, spec.radius);
        let top = ring_point(angle, half_height, spec.radius);
        emit_projected(bottom, top, spec, camera, sink);
    }

    sink.end_lines();
    Ok(())
}

fn ring_point(angle: f32, y: f32, radius: f32) -> Point3<f32> {
    Point3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Rotate, translate and project both endpoints, then emit the segment.
/// The scaled points keep their world depth, which the sink ignores.
fn emit_projected(
    p1: Point3<f32>,
    p2: Point3<f32>,
    spec: &CylinderSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) {
    let center = Vector3::new(spec.center.x, spec.center.y, spec.z);

    let p1 = rotate(p1, &spec.orientation) + center;
    let p2 = rotate(p2, &spec.orientation) + center;

    let scale1 = camera.scale_at(p1.z);
    let scale2 = camera.scale_at(p2.z);

    sink.vertex3(Point3::new(p1.x * scale1, p1.y * scale1, p1.z));
    sink.vertex3(Point3::new(p2.x * scale2, p2.y * scale2, p2.z));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::PinholeCamera;
    use crate::render::testing::RecordingSink;

    fn spec(segments: u32) -> CylinderSpec {
        CylinderSpec {
            center: Point2::new(0.0, 0.0),
            z: 1.0,
            radius: 1.5,
            height: 4.0,
            segments,
            orientation: Orientation::new(10.0, 20.0, 30.0),
            style: Some(LineStyle::new(0, 255, 0)),
        }
    }

    #[test]
    fn test_cylinder_emits_three_edges_per_segment() {
        let mut sink = RecordingSink::new();
        draw(&spec(32), &PinholeCamera::new(10.0), &mut sink).unwrap();
        assert_eq!(sink.segment_count(), 96);

        let mut sink = RecordingSink::new();
        draw(&spec(5), &PinholeCamera::new(10.0), &mut sink).unwrap();
        assert_eq!(sink.segment_count(), 15);
    }

    #[test]
    fn test_zero_segments_does_not_divide() {
        let mut sink = RecordingSink::new();
        let result = draw(&spec(0), &PinholeCamera::new(10.0), &mut sink);

        assert_eq!(result, Err(DrawError::Degenerate { shape: "cylinder" }));
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_missing_style_skips_draw() {
        let mut sink = RecordingSink::new();
        let result = draw(
            &CylinderSpec {
                style: None,
                ..spec(32)
            },
            &PinholeCamera::new(10.0),
            &mut sink,
        );

        assert_eq!(result, Err(DrawError::MissingStyle { shape: "cylinder" }));
        assert!(sink.batches.is_empty());
    }
}
