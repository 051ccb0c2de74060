/// Static platform the falling box lands on
use nalgebra::{Point2, Point3, Vector3};

use crate::aabb::Aabb;
use crate::projection::{project, Perspective};
use crate::render::{LineSink, LineStyle};
use crate::shapes::{emit_face, DrawError};

/// Cuboid with independent width, height and depth; never rotated
#[derive(Debug, Clone, Copy)]
pub struct PlatformSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub style: Option<LineStyle>,
}

/// Bounding box from center and half-extents.
///
/// The inputs are static, so the value never changes between frames even
/// though it is recomputed every draw.
pub fn bounding_box(spec: &PlatformSpec) -> Aabb {
    Aabb::from_center_half_extents(
        Point3::new(spec.center.x, spec.center.y, spec.z),
        Vector3::new(spec.width * 0.5, spec.height * 0.5, spec.depth * 0.5),
    )
}

/// Draw the platform wireframe: front face, back face, connectors
pub fn draw(
    spec: &PlatformSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec
        .style
        .ok_or(DrawError::MissingStyle { shape: "platform" })?;
    if spec.width <= 0.0 || spec.height <= 0.0 || spec.depth <= 0.0 {
        return Err(DrawError::Degenerate { shape: "platform" });
    }

    sink.begin_lines(style);

    let half_width = spec.width * 0.5;
    let half_height = spec.height * 0.5;
    let half_depth = spec.depth * 0.5;
    let center = Point3::new(spec.center.x, spec.center.y, spec.z);

    let vertices = [
        // front face
        Point3::new(half_width, half_height, half_depth),
        Point3::new(-half_width, half_height, half_depth),
        Point3::new(-half_width, -half_height, half_depth),
        Point3::new(half_width, -half_height, half_depth),
        // back face
        Point3::new(half_width, half_height, -half_depth),
        Point3::new(-half_width, half_height, -half_depth),
        Point3::new(-half_width, -half_height, -half_depth),
        Point3::new(half_width, -half_height, -half_depth),
    ];

    let mut computed = [Point2::origin(); 8];
    for (i, v) in vertices.iter().enumerate() {
        computed[i] = project(*v + center.coords, camera);
    }

    emit_face(&computed, [0, 1, 2, 3], sink);
    emit_face(&computed, [4, 5, 6, 7], sink);

    for i in 0..4 {
        sink.vertex2(computed[i]);
        sink.vertex2(computed[i + 4]);
    }

    sink.end_lines();
    Ok(())
}
