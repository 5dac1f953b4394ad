//! # Collision Volumes
//!
//! Float boxes handed to the physics engine, one per extracted primitive.
//! Cell `c` occupies `[c, c + 1)` on each axis, so an integer box
//! `[min, max]` becomes the float box `[min, max + 1]`.

use voxenv_core::{BoundingBox, VoxelCoords};

// ============================================================================
// AABB (Axis-Aligned Bounding Box)
// ============================================================================

/// Axis-Aligned Bounding Box in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the box (x, y, z).
    pub min: [f32; 3],
    /// Maximum corner of the box (x, y, z).
    pub max: [f32; 3],
}

impl Aabb {
    /// Creates a new AABB.
    #[must_use]
    pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Creates an AABB for a single voxel.
    #[must_use]
    pub fn from_voxel(v: VoxelCoords) -> Self {
        let (x, y, z) = (v.x as f32, v.y as f32, v.z as f32);
        Self {
            min: [x, y, z],
            max: [x + 1.0, y + 1.0, z + 1.0],
        }
    }

    /// Creates the AABB covering every cell of `bounds`.
    ///
    /// Returns `None` for a box with no cells.
    #[must_use]
    pub fn from_bounding_box(bounds: &BoundingBox) -> Option<Self> {
        if !bounds.is_valid() {
            return None;
        }
        let (lo, hi) = (bounds.min, bounds.max);
        Some(Self {
            min: [lo.x as f32, lo.y as f32, lo.z as f32],
            max: [hi.x as f32 + 1.0, hi.y as f32 + 1.0, hi.z as f32 + 1.0],
        })
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Half the size on each axis.
    #[must_use]
    pub fn half_extents(&self) -> [f32; 3] {
        [
            (self.max[0] - self.min[0]) / 2.0,
            (self.max[1] - self.min[1]) / 2.0,
            (self.max[2] - self.min[2]) / 2.0,
        ]
    }

    /// Checks if this AABB intersects another. Touching faces do not count.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min[0] < other.max[0]
            && self.max[0] > other.min[0]
            && self.min[1] < other.max[1]
            && self.max[1] > other.min[1]
            && self.min[2] < other.max[2]
            && self.max[2] > other.min[2]
    }

    /// Checks if `point` lies inside or on the surface.
    #[must_use]
    pub fn contains_point(&self, point: [f32; 3]) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns the overlap amount on each axis. Positive = overlap, Negative = gap.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> [f32; 3] {
        [
            self.max[0].min(other.max[0]) - self.min[0].max(other.min[0]),
            self.max[1].min(other.max[1]) - self.min[1].max(other.min[1]),
            self.max[2].min(other.max[2]) - self.min[2].max(other.min[2]),
        ]
    }

    /// Moves the AABB by delta.
    #[must_use]
    pub fn translate(&self, delta: [f32; 3]) -> Self {
        Self {
            min: [
                self.min[0] + delta[0],
                self.min[1] + delta[1],
                self.min[2] + delta[2],
            ],
            max: [
                self.max[0] + delta[0],
                self.max[1] + delta[1],
                self.max[2] + delta[2],
            ],
        }
    }
}

/// Collision volumes for `boxes`, one per valid box, in order.
#[must_use]
pub fn collision_volumes(boxes: &[BoundingBox]) -> Vec<Aabb> {
    boxes.iter().filter_map(Aabb::from_bounding_box).collect()
}

/// Index of the first volume `probe` intersects.
#[must_use]
pub fn first_contact(volumes: &[Aabb], probe: &Aabb) -> Option<usize> {
    volumes.iter().position(|v| v.intersects(probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounding_box() {
        let bounds = BoundingBox::new(VoxelCoords::new(0, 1, 0), VoxelCoords::new(0, 3, 3));
        let aabb = Aabb::from_bounding_box(&bounds).unwrap();

        assert_eq!(aabb.min, [0.0, 1.0, 0.0]);
        assert_eq!(aabb.max, [1.0, 4.0, 4.0]);
        assert_eq!(aabb.center(), [0.5, 2.5, 2.0]);
        assert_eq!(aabb.half_extents(), [0.5, 1.5, 2.0]);
    }

    #[test]
    fn test_empty_box_has_no_volume() {
        assert_eq!(Aabb::from_bounding_box(&BoundingBox::empty()), None);
        assert!(collision_volumes(&[BoundingBox::empty()]).is_empty());
    }

    #[test]
    fn test_from_voxel_is_unit_cell() {
        let v = VoxelCoords::new(3, -1, 7);
        let aabb = Aabb::from_voxel(v);

        assert_eq!(aabb.min, [3.0, -1.0, 7.0]);
        assert_eq!(aabb.max, [4.0, 0.0, 8.0]);
        assert_eq!(Aabb::from_bounding_box(&BoundingBox::from_point(v)), Some(aabb));
        assert_eq!(aabb.half_extents(), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_adjacent_voxels_touch_without_intersecting() {
        let a = Aabb::from_voxel(VoxelCoords::new(0, 0, 0));
        let b = Aabb::from_voxel(VoxelCoords::new(1, 0, 0));

        assert!(!a.intersects(&b));
        assert_eq!(a.overlap(&b)[0], 0.0);
        assert!(a.intersects(&b.translate([-0.25, 0.0, 0.0])));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let aabb = Aabb::new([0.0, 0.0, 0.0], [2.0, 1.0, 2.0]);

        assert!(aabb.contains_point([0.0, 0.5, 2.0]));
        assert!(aabb.contains_point([1.0, 1.0, 1.0]));
        assert!(!aabb.contains_point([2.1, 0.5, 1.0]));
    }

    #[test]
    fn test_first_contact() {
        let volumes = collision_volumes(&[
            BoundingBox::new(VoxelCoords::new(0, 0, 0), VoxelCoords::new(4, 0, 3)),
            BoundingBox::new(VoxelCoords::new(0, 1, 0), VoxelCoords::new(0, 3, 3)),
        ]);
        let agent = Aabb::new([2.2, 1.0, 1.2], [2.8, 2.8, 1.8]);

        assert_eq!(first_contact(&volumes, &agent), None);
        assert_eq!(first_contact(&volumes, &agent.translate([0.0, -0.1, 0.0])), Some(0));
        assert_eq!(first_contact(&volumes, &agent.translate([-1.5, 0.0, 0.0])), Some(1));
    }
}
