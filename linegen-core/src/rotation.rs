/// Euler rotation applied in fixed Z, X, Y order
use nalgebra::Point3;

/// Rotation angles around three axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Spin by delta amounts (in degrees)
    pub fn spin(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate a point about the origin.
///
/// Axis order is Z, then X, then Y. The order is load-bearing: every shape
/// generator routes through here so all wireframes rotate identically.
pub fn rotate(p: Point3<f32>, orientation: &Orientation) -> Point3<f32> {
    let x_rad = orientation.x.to_radians();
    let y_rad = orientation.y.to_radians();
    let z_rad = orientation.z.to_radians();

    // z rotation
    let x = p.x * z_rad.cos() - p.y * z_rad.sin();
    let y = p.y * z_rad.cos() + p.x * z_rad.sin();
    let p = Point3::new(x, y, p.z);

    // x rotation
    let y = p.y * x_rad.cos() - p.z * x_rad.sin();
    let z = p.y * x_rad.sin() + p.z * x_rad.cos();
    let p = Point3::new(p.x, y, z);

    // y rotation
    let x = p.x * y_rad.cos() + p.z * y_rad.sin();
    let z = -p.x * y_rad.sin() + p.z * y_rad.cos();
    Point3::new(x, p.y, z)
}

/// Rotate a point about an arbitrary pivot
pub fn rotate_about(
    p: Point3<f32>,
    pivot: Point3<f32>,
    orientation: &Orientation,
) -> Point3<f32> {
    let local = rotate(Point3::from(p - pivot), orientation);
    local + pivot.coords
}
