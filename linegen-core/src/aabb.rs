/// Axis-aligned bounding boxes for collision tests
use nalgebra::{Point3, Vector3};

/// Axis-aligned box with `min <= max` on every axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Inclusive overlap test on all three axes.
    ///
    /// Boxes that merely touch count as overlapping, so a body resting
    /// exactly on a surface still registers contact.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let overlap_x = self.min.x <= other.max.x && self.max.x >= other.min.x;
        let overlap_y = self.min.y <= other.max.y && self.max.y >= other.min.y;
        let overlap_z = self.min.z <= other.max.z && self.max.z >= other.min.z;

        overlap_x && overlap_y && overlap_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::from_center_half_extents(Point3::new(x, y, z), Vector3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_box_overlaps_itself() {
        let a = unit_box_at(1.0, 2.0, 3.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(0.6, 0.3, -0.2);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));

        let c = unit_box_at(5.0, 0.0, 0.0);
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_faces_count_as_overlap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(1.0, 0.0, 0.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_disjoint_on_one_axis_is_enough() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        assert!(!a.overlaps(&unit_box_at(2.0, 0.0, 0.0)));
        assert!(!a.overlaps(&unit_box_at(0.0, 2.0, 0.0)));
        assert!(!a.overlaps(&unit_box_at(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_from_center_half_extents() {
        let a = Aabb::from_center_half_extents(Point3::new(1.0, -3.0, 0.0), Vector3::new(5.0, 0.5, 1.0));
        assert_eq!(a.min, Point3::new(-4.0, -3.5, -1.0));
        assert_eq!(a.max, Point3::new(6.0, -2.5, 1.0));
    }
}
