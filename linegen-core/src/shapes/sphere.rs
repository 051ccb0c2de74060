/// Sphere wireframe from a latitude/longitude grid
use nalgebra::{Point2, Point3, Vector3};
use std::f32::consts::{PI, TAU};

use super::DrawError;
use crate::projection::Perspective;
use crate::render::{LineSink, LineStyle};
use crate::rotation::{rotate, Orientation};

pub const DEFAULT_SEGMENTS: u32 = 16;

#[derive(Debug, Clone, Copy)]
pub struct SphereSpec {
    pub center: Point2<f32>,
    pub z: f32,
    pub radius: f32,
    pub lat_segments: u32,
    pub lon_segments: u32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
}

/// Draw a sphere as a grid of points in spherical coordinates, connecting
/// each point to its longitude and latitude neighbors.
///
/// Edge count is (lat + 1) * lon horizontal plus lat * (lon + 1) vertical.
pub fn draw(
    spec: &SphereSpec,
    camera: &dyn Perspective,
    sink: &mut dyn LineSink,
) -> Result<(), DrawError> {
    let style = spec
        .style
        .ok_or(DrawError::MissingStyle { shape: "sphere" })?;
    if spec.radius <= 0.0 || spec.lat_segments == 0 || spec.lon_segments == 0 {
        return Err(DrawError::Degenerate { shape: "sphere" });
    }

    sink.begin_lines(style);

    // polar angle from the top pole, azimuth around the Y axis
    for lat in 0..=spec.lat_segments {
        let theta = PI * lat as f32 / spec.lat_segments as f32;

        for lon in 0..=spec.lon_segments {
            let phi = TAU * lon as f32 / spec.lon_segments as f32;
            let projected = projected_grid_point(theta, phi, spec, camera);

            // horizontal connection to the next longitude
            if lon < spec.lon_segments {
                let next_phi = TAU * (lon + 1) as f32 / spec.lon_segments as f32;
                let next = projected_grid_point(theta, next_phi, spec, camera);

                sink.vertex3(projected);
                sink.vertex3(next);
            }

            // vertical connection to the next latitude
            if lat < spec.lat_segments {
                let next_theta = PI * (lat + 1) as f32 / spec.lat_segments as f32;
                let next = projected_grid_point(next_theta, phi, spec, camera);

                sink.vertex3(projected);
                sink.vertex3(next);
            }
        }
    }

    sink.end_lines();
    Ok(())
}

/// Grid point at (theta, phi): rotated about the sphere center, translated
/// to world space and flattened to the projection plane
fn projected_grid_point(
    theta: f32,
    phi: f32,
    spec: &SphereSpec,
    camera: &dyn Perspective,
) -> Point3<f32> {
    let local = Point3::new(
        spec.radius * theta.sin() * phi.cos(),
        spec.radius * theta.cos(),
        spec.radius * theta.sin() * phi.sin(),
    );

    let p = rotate(local, &spec.orientation) + Vector3::new(spec.center.x, spec.center.y, spec.z);
    let scale = camera.scale_at(p.z);

    Point3::new(p.x * scale, p.y * scale, 0.0)
}
