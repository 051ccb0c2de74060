/// Rectangular column wireframe (cuboid with a square cross-section)
use nalgebra::{Point2, Point3};

use super::{emit_face, DrawError};
use crate::projection::{project, Perspective};
use crate::render::{LineSink, LineStyle};
use crate::rotation::{rotate, Orientation};

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
}

/// Draw a column of `width` x `height`; depth matches the width so the
/// cross-section stays square. 8 vertices, 12 edges.
pub fn draw(
    spec: &ColumnSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec.style.ok_or(DrawError::MissingStyle { shape: "column" })?;
    if spec.width <= 0.0 || spec.height <= 0.0 {
        return Err(DrawError::Degenerate { shape: "column" });
    }

    sink.begin_lines(style);

    let half_width = spec.width * 0.5;
    let half_height = spec.height * 0.5;
    let center = Point3::new(spec.center.x, spec.center.y, spec.z);

    let vertices = [
        // front face
        Point3::new(half_width, half_height, half_width),
        Point3::new(-half_width, half_height, half_width),
        Point3::new(-half_width, -half_height, half_width),
        Point3::new(half_width, -half_height, half_width),
        // back face
        Point3::new(half_width, half_height, -half_width),
        Point3::new(-half_width, half_height, -half_width),
        Point3::new(-half_width, -half_height, -half_width),
        Point3::new(half_width, -half_height, -half_width),
    ];

    let mut computed = [Point2::origin(); 8];
    for (i, v) in vertices.iter().enumerate() {
        let p = rotate(*v, &spec.orientation) + center.coords;
        computed[i] = project(p, camera);
    }

    emit_face(&computed, [0, 1, 2, 3], sink);
    emit_face(&computed, [4, 5, 6, 7], sink);

    // connecting edges between the faces
    for i in 0..4 {
        sink.vertex2(computed[i]);
        sink.vertex2(computed[i + 4]);
    }

    sink.end_lines();
    Ok(())
}
