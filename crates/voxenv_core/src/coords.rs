//! # Voxel Coordinates
//!
//! Axis convention used throughout the workspace:
//! - `x`: length
//! - `y`: height
//! - `z`: width

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Integer coordinates of a single grid cell.
///
/// The derived ordering is lexicographic (x, then y, then z), which is the
/// same order `VoxelGrid` iterates in. Component-wise comparisons are the
/// explicit helpers below.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable, Serialize,
    Deserialize,
)]
pub struct VoxelCoords {
    /// Length axis.
    pub x: i32,
    /// Height axis.
    pub y: i32,
    /// Width axis.
    pub z: i32,
}

impl VoxelCoords {
    /// The origin cell.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Creates new coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Per-axis minimum of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn componentwise_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Per-axis maximum of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn componentwise_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Returns true if every component of `self` is `<=` the matching
    /// component of `other`.
    #[inline]
    #[must_use]
    pub const fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    /// Offsets the coordinates by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Returns the components as an array in (x, y, z) order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for VoxelCoords {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for VoxelCoords {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for VoxelCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_min_max_mixes_axes() {
        let a = VoxelCoords::new(0, 5, 2);
        let b = VoxelCoords::new(3, 1, 2);

        assert_eq!(a.componentwise_min(b), VoxelCoords::new(0, 1, 2));
        assert_eq!(a.componentwise_max(b), VoxelCoords::new(3, 5, 2));
    }

    #[test]
    fn test_all_le_is_componentwise() {
        let a = VoxelCoords::new(0, 5, 2);
        let b = VoxelCoords::new(3, 1, 2);

        // Lexicographically a < b, but not component-wise.
        assert!(a < b);
        assert!(!a.all_le(b));
        assert!(a.all_le(VoxelCoords::new(0, 5, 2)));
    }

    #[test]
    fn test_ordering_matches_scan_order() {
        let mut cells = vec![
            VoxelCoords::new(1, 0, 0),
            VoxelCoords::new(0, 1, 0),
            VoxelCoords::new(0, 0, 1),
            VoxelCoords::new(0, 0, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                VoxelCoords::new(0, 0, 0),
                VoxelCoords::new(0, 0, 1),
                VoxelCoords::new(0, 1, 0),
                VoxelCoords::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(VoxelCoords::new(-1, 2, 3).to_string(), "(-1, 2, 3)");
    }
}
