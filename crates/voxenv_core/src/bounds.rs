//! # Bounding Boxes
//!
//! Axis-aligned integer boxes covering the cells `[min, max]` on every axis
//! (both corners inclusive).
//!
//! ## Accumulation
//!
//! A box starts empty and grows through [`BoundingBox::add_point`]. Each axis
//! is tracked independently:
//!
//! ```text
//! min' = componentwise_min(min, v)
//! max' = componentwise_max(max, v)
//! ```
//!
//! A point may be below `min` on one axis and above `max` on another; both
//! corners move. The empty box has `min = +inf` and `max = -inf` on every axis
//! so the first point lands on both corners.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::coords::VoxelCoords;

/// Inclusive axis-aligned integer box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Lowest covered cell.
    pub min: VoxelCoords,
    /// Highest covered cell.
    pub max: VoxelCoords,
}

impl BoundingBox {
    /// Creates a box from its corners as given.
    ///
    /// Corners are not reordered; use [`BoundingBox::from_corners`] for
    /// arbitrary opposite corners.
    #[inline]
    #[must_use]
    pub const fn new(min: VoxelCoords, max: VoxelCoords) -> Self {
        Self { min, max }
    }

    /// The box containing no cells.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: VoxelCoords::new(i32::MAX, i32::MAX, i32::MAX),
            max: VoxelCoords::new(i32::MIN, i32::MIN, i32::MIN),
        }
    }

    /// The box covering exactly one cell.
    #[inline]
    #[must_use]
    pub const fn from_point(v: VoxelCoords) -> Self {
        Self { min: v, max: v }
    }

    /// The smallest box covering two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: VoxelCoords, b: VoxelCoords) -> Self {
        Self {
            min: a.componentwise_min(b),
            max: a.componentwise_max(b),
        }
    }

    /// Extends the box to include `v`.
    #[inline]
    pub fn add_point(&mut self, v: VoxelCoords) {
        self.min = self.min.componentwise_min(v);
        self.max = self.max.componentwise_max(v);
    }

    /// Extends the box to include every cell of `other`.
    pub fn merge(&mut self, other: &Self) {
        if other.is_valid() {
            self.add_point(other.min);
            self.add_point(other.max);
        }
    }

    /// Returns true once at least one point has been added.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min.all_le(self.max)
    }

    /// Returns true if `v` is covered.
    #[inline]
    #[must_use]
    pub const fn contains(&self, v: VoxelCoords) -> bool {
        self.min.all_le(v) && v.all_le(self.max)
    }

    /// Returns true if the two boxes share at least one cell.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Number of cells along each axis; zeros for an empty box.
    #[must_use]
    pub fn size(&self) -> [u32; 3] {
        if !self.is_valid() {
            return [0; 3];
        }
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u32;
        [
            span(self.min.x, self.max.x),
            span(self.min.y, self.max.y),
            span(self.min.z, self.max.z),
        ]
    }

    /// Number of covered cells.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        self.size().iter().map(|&s| u64::from(s)).product()
    }

    /// Iterates over the covered cells in x-major, y, z order.
    pub fn cells(&self) -> impl Iterator<Item = VoxelCoords> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y)
                .flat_map(move |y| (min.z..=max.z).map(move |z| VoxelCoords::new(x, y, z)))
        })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<VoxelCoords> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = VoxelCoords>>(iter: I) -> Self {
        let mut bbox = Self::empty();
        for v in iter {
            bbox.add_point(v);
        }
        bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box_is_invalid() {
        let bbox = BoundingBox::empty();

        assert!(!bbox.is_valid());
        assert_eq!(bbox.cell_count(), 0);
        assert_eq!(bbox.cells().count(), 0);
        assert!(!bbox.contains(VoxelCoords::ORIGIN));
    }

    #[test]
    fn test_first_point_seeds_both_corners() {
        let mut bbox = BoundingBox::empty();
        bbox.add_point(VoxelCoords::new(3, -2, 7));

        assert!(bbox.is_valid());
        assert_eq!(bbox, BoundingBox::from_point(VoxelCoords::new(3, -2, 7)));
        assert_eq!(bbox.cell_count(), 1);
    }

    #[test]
    fn test_point_below_min_and_above_max_on_different_axes() {
        // The point is below min on x and above max on y at the same time.
        // Both corners must move.
        let mut bbox = BoundingBox::new(VoxelCoords::new(2, 2, 2), VoxelCoords::new(4, 4, 4));
        bbox.add_point(VoxelCoords::new(0, 9, 3));

        assert_eq!(bbox.min, VoxelCoords::new(0, 2, 2));
        assert_eq!(bbox.max, VoxelCoords::new(4, 9, 4));
        assert!(bbox.contains(VoxelCoords::new(0, 9, 3)));
    }

    #[test]
    fn test_added_points_are_contained() {
        let points = [
            VoxelCoords::new(5, 0, 1),
            VoxelCoords::new(-3, 4, 1),
            VoxelCoords::new(2, -1, 8),
            VoxelCoords::new(0, 0, -6),
        ];
        let mut bbox = BoundingBox::empty();

        for (i, &p) in points.iter().enumerate() {
            bbox.add_point(p);
            for &seen in &points[..=i] {
                assert!(bbox.min.all_le(seen) && seen.all_le(bbox.max));
            }
        }
    }

    #[test]
    fn test_accumulation_is_order_independent() {
        let points = [
            VoxelCoords::new(5, 0, 1),
            VoxelCoords::new(-3, 4, 1),
            VoxelCoords::new(2, -1, 8),
            VoxelCoords::new(0, 0, -6),
        ];
        let forward: BoundingBox = points.iter().copied().collect();
        let backward: BoundingBox = points.iter().rev().copied().collect();
        let shuffled: BoundingBox = [points[2], points[0], points[3], points[1]]
            .into_iter()
            .collect();

        assert_eq!(forward.min, VoxelCoords::new(-3, -1, -6));
        assert_eq!(forward.max, VoxelCoords::new(5, 4, 8));
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_from_corners_normalizes() {
        let bbox = BoundingBox::from_corners(VoxelCoords::new(4, 0, 3), VoxelCoords::new(0, 2, 0));

        assert_eq!(bbox.min, VoxelCoords::new(0, 0, 0));
        assert_eq!(bbox.max, VoxelCoords::new(4, 2, 3));
        assert_eq!(bbox.size(), [5, 3, 4]);
        assert_eq!(bbox.cell_count(), 60);
        assert_eq!(bbox.cells().count(), 60);
    }

    #[test]
    fn test_merge_ignores_empty() {
        let mut bbox = BoundingBox::from_point(VoxelCoords::new(1, 1, 1));
        bbox.merge(&BoundingBox::empty());
        assert_eq!(bbox, BoundingBox::from_point(VoxelCoords::new(1, 1, 1)));

        bbox.merge(&BoundingBox::new(VoxelCoords::new(3, 0, 1), VoxelCoords::new(3, 0, 2)));
        assert_eq!(bbox.min, VoxelCoords::new(1, 0, 1));
        assert_eq!(bbox.max, VoxelCoords::new(3, 1, 2));
    }

    #[test]
    fn test_intersects_is_inclusive() {
        let a = BoundingBox::new(VoxelCoords::new(0, 0, 0), VoxelCoords::new(2, 0, 2));
        let touching = BoundingBox::new(VoxelCoords::new(2, 0, 2), VoxelCoords::new(3, 1, 3));
        let apart = BoundingBox::new(VoxelCoords::new(3, 0, 0), VoxelCoords::new(4, 0, 2));

        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(!a.intersects(&BoundingBox::empty()));
    }

    #[test]
    fn test_cells_order() {
        let bbox = BoundingBox::new(VoxelCoords::new(1, 0, 0), VoxelCoords::new(2, 0, 1));
        let cells: Vec<_> = bbox.cells().collect();

        assert_eq!(
            cells,
            vec![
                VoxelCoords::new(1, 0, 0),
                VoxelCoords::new(1, 0, 1),
                VoxelCoords::new(2, 0, 0),
                VoxelCoords::new(2, 0, 1),
            ]
        );
    }
}
