/// Single-primitive demo scene
use log::warn;
use nalgebra::Point2;

use crate::projection::Perspective;
use crate::render::{LineSink, LineStyle};
use crate::rotation::Orientation;
use crate::shapes::column::{self, ColumnSpec};
use crate::shapes::cube::{self, CubeSpec};
use crate::shapes::cylinder::{self, CylinderSpec};
use crate::shapes::pyramid::{self, PyramidSpec};
use crate::shapes::sphere::{self, SphereSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    RectangularColumn,
    Sphere,
    Cylinder,
}

/// One selected primitive drawn every frame from shared tunables.
///
/// The column and cylinder derive their dimensions from the shared size
/// (width/radius `size - 1`, height `size + 3`), so sizes up to 1 leave
/// them degenerate on purpose.
pub struct ShapeScene {
    pub kind: ShapeKind,
    pub size: f32,
    pub position: Point2<f32>,
    pub z: f32,
    pub orientation: Orientation,
    pub style: Option<LineStyle>,
    pub segments: u32,
    pub lat_segments: u32,
    pub lon_segments: u32,
}

impl ShapeScene {
    pub fn frame(&self, camera: &dyn Perspective, sink: &mut dyn LineSink) {
        let result = match self.kind {
            ShapeKind::Cube => cube::draw(
                &CubeSpec {
                    center: self.position,
                    z: self.z,
                    size: self.size,
                    orientation: self.orientation,
                    style: self.style,
                },
                camera,
                sink,
            ),
            ShapeKind::Pyramid => pyramid::draw(
                &PyramidSpec {
                    center: self.position,
                    z: self.z,
                    size: self.size,
                    orientation: self.orientation,
                    style: self.style,
                },
                camera,
                sink,
            ),
            ShapeKind::RectangularColumn => column::draw(
                &ColumnSpec {
                    center: self.position,
                    z: self.z,
                    width: self.size - 1.0,
                    height: self.size + 3.0,
                    orientation: self.orientation,
                    style: self.style,
                },
                camera,
                sink,
            ),
            ShapeKind::Sphere => sphere::draw(
                &SphereSpec {
                    center: self.position,
                    z: self.z,
                    radius: self.size,
                    lat_segments: self.lat_segments,
                    lon_segments: self.lon_segments,
                    orientation: self.orientation,
                    style: self.style,
                },
                camera,
                sink,
            ),
            ShapeKind::Cylinder => cylinder::draw(
                &CylinderSpec {
                    center: self.position,
                    z: self.z,
                    radius: self.size - 1.0,
                    height: self.size + 3.0,
                    segments: self.segments,
                    orientation: self.orientation,
                    style: self.style,
                },
                camera,
                sink,
            ),
        };

        if let Err(err) = result {
            warn!("skipping shape draw: {err}");
        }
    }
}
