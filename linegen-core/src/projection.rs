/// Depth-based perspective scaling
use nalgebra::{Point2, Point3};

/// Perspective provider queried once per vertex.
///
/// The returned scale multiplies both X and Y of a point, shrinking
/// geometry toward the origin as depth increases. Implementations must
/// return a finite scale for every depth, including non-positive ones.
pub trait Perspective {
    fn scale_at(&self, z: f32) -> f32;
}

/// Project a 3D point to 2D by applying the perspective scale to X and Y
pub fn project(p: Point3<f32>, camera: &dyn Perspective) -> Point2<f32> {
    let scale = camera.scale_at(p.z);
    Point2::new(p.x * scale, p.y * scale)
}

/// Pinhole camera at the origin looking down +Z
#[derive(Debug, Clone, Copy)]
pub struct PinholeCamera {
    pub focal_length: f32,
    pub min_depth: f32,
}

impl PinholeCamera {
    pub fn new(focal_length: f32) -> Self {
        Self {
            focal_length,
            min_depth: 0.1,
        }
    }
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Perspective for PinholeCamera {
    fn scale_at(&self, z: f32) -> f32 {
        // Clamp so points at or behind the camera plane stay finite
        let depth = (self.focal_length + z).max(self.min_depth);
        self.focal_length / depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_shrinks_with_depth() {
        let camera = PinholeCamera::new(10.0);
        let near = camera.scale_at(0.0);
        let mid = camera.scale_at(5.0);
        let far = camera.scale_at(50.0);
        assert_relative_eq!(near, 1.0);
        assert!(near > mid);
        assert!(mid > far);
        assert!(far > 0.0);
    }

    #[test]
    fn test_degenerate_depth_is_clamped() {
        let camera = PinholeCamera::new(10.0);
        let scale = camera.scale_at(-10.0);
        assert!(scale.is_finite());
        assert_relative_eq!(scale, 10.0 / 0.1);

        let scale = camera.scale_at(-1000.0);
        assert!(scale.is_finite());
    }

    #[test]
    fn test_project_scales_x_and_y() {
        let camera = PinholeCamera::new(10.0);
        let projected = project(Point3::new(2.0, -3.0, 10.0), &camera);
        assert_relative_eq!(projected, Point2::new(1.0, -1.5), epsilon = 1e-6);
    }
}
