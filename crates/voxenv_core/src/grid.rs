//! # Dense Voxel Grid
//!
//! A fixed-extent 3D array stored contiguously.
//!
//! ## Layout
//!
//! Cells are linearized x-major, then y, then z:
//!
//! ```text
//! index = (x * height + y) * width + z
//! ```
//!
//! so the innermost (fastest) axis is z. Iteration follows storage order,
//! which keeps every scan over the grid deterministic and cache friendly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::coords::VoxelCoords;
use crate::error::{GridError, GridResult};

/// Size of a grid along each axis, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridExtent {
    /// Cells along x.
    pub length: usize,
    /// Cells along y.
    pub height: usize,
    /// Cells along z.
    pub width: usize,
}

impl GridExtent {
    /// Creates a new extent.
    #[inline]
    #[must_use]
    pub const fn new(length: usize, height: usize, width: usize) -> Self {
        Self {
            length,
            height,
            width,
        }
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    #[must_use]
    pub fn checked_volume(self) -> Option<usize> {
        self.length.checked_mul(self.height)?.checked_mul(self.width)
    }

    /// Returns `(length, height, width)`.
    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize, usize) {
        (self.length, self.height, self.width)
    }

    /// The box covering every cell of this extent.
    #[must_use]
    pub fn bounds(self) -> BoundingBox {
        BoundingBox::new(
            VoxelCoords::ORIGIN,
            VoxelCoords::new(
                self.length as i32 - 1,
                self.height as i32 - 1,
                self.width as i32 - 1,
            ),
        )
    }

    /// Returns true if `coords` lies inside the extent.
    #[inline]
    #[must_use]
    pub fn contains(self, coords: VoxelCoords) -> bool {
        coords.x >= 0
            && coords.y >= 0
            && coords.z >= 0
            && (coords.x as usize) < self.length
            && (coords.y as usize) < self.height
            && (coords.z as usize) < self.width
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.height, self.width)
    }
}

/// Dense grid mapping every in-extent coordinate to a `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid<T> {
    extent: GridExtent,
    cells: Vec<T>,
}

impl<T: Clone> VoxelGrid<T> {
    /// Creates a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidExtent`] if any dimension is zero, exceeds
    /// `i32::MAX`, or the total cell count overflows.
    pub fn filled(length: usize, height: usize, width: usize, value: T) -> GridResult<Self> {
        let extent = GridExtent::new(length, height, width);
        let invalid = || GridError::InvalidExtent {
            length,
            height,
            width,
        };

        if length == 0 || height == 0 || width == 0 {
            return Err(invalid());
        }
        let max_axis = i32::MAX as usize;
        if length > max_axis || height > max_axis || width > max_axis {
            return Err(invalid());
        }
        let volume = extent.checked_volume().ok_or_else(invalid)?;

        Ok(Self {
            extent,
            cells: vec![value; volume],
        })
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Overwrites every cell covered by `bbox` with `value`.
    ///
    /// The box is checked against the extent before anything is written, so
    /// a failed call leaves the grid untouched. An empty box writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if either corner lies outside the
    /// extent.
    pub fn fill_box(&mut self, bbox: &BoundingBox, value: T) -> GridResult<()> {
        if !bbox.is_valid() {
            return Ok(());
        }
        self.check(bbox.min)?;
        self.check(bbox.max)?;

        for coords in bbox.cells() {
            let index = self.linear_index(coords);
            self.cells[index] = value.clone();
        }
        Ok(())
    }
}

impl<T: Clone + Default> VoxelGrid<T> {
    /// Creates a grid with every cell set to `T::default()`.
    ///
    /// # Errors
    ///
    /// See [`VoxelGrid::filled`].
    pub fn new(length: usize, height: usize, width: usize) -> GridResult<Self> {
        Self::filled(length, height, width, T::default())
    }

    /// Creates a default-filled grid from an extent.
    ///
    /// # Errors
    ///
    /// See [`VoxelGrid::filled`].
    pub fn with_extent(extent: GridExtent) -> GridResult<Self> {
        Self::new(extent.length, extent.height, extent.width)
    }
}

impl<T> VoxelGrid<T> {
    /// Returns the extent fixed at construction.
    #[inline]
    #[must_use]
    pub const fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if `coords` lies inside the extent.
    #[inline]
    #[must_use]
    pub fn contains(&self, coords: VoxelCoords) -> bool {
        self.extent.contains(coords)
    }

    /// Borrows the value at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn get_ref(&self, coords: VoxelCoords) -> GridResult<&T> {
        self.check(coords)?;
        Ok(&self.cells[self.linear_index(coords)])
    }

    /// Writes `value` at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn set(&mut self, coords: VoxelCoords, value: T) -> GridResult<()> {
        self.check(coords)?;
        let index = self.linear_index(coords);
        self.cells[index] = value;
        Ok(())
    }

    /// Iterates over every cell in x-major, y, z order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoords, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| (self.coords_of(index), value))
    }

    /// Iterates over every in-extent coordinate in x-major, y, z order.
    pub fn coords(&self) -> impl Iterator<Item = VoxelCoords> + '_ {
        (0..self.cells.len()).map(move |index| self.coords_of(index))
    }

    /// Counts the cells whose value satisfies `predicate`.
    pub fn count_where(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|value| predicate(value)).count()
    }

    /// Raw cell storage in linear order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Linear index of `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn index_of(&self, coords: VoxelCoords) -> GridResult<usize> {
        self.check(coords)?;
        Ok(self.linear_index(coords))
    }

    fn check(&self, coords: VoxelCoords) -> GridResult<()> {
        if self.extent.contains(coords) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                coords,
                extent: self.extent,
            })
        }
    }

    /// Caller guarantees `coords` is in range.
    #[inline]
    fn linear_index(&self, coords: VoxelCoords) -> usize {
        (coords.x as usize * self.extent.height + coords.y as usize) * self.extent.width
            + coords.z as usize
    }

    #[inline]
    fn coords_of(&self, index: usize) -> VoxelCoords {
        let z = index % self.extent.width;
        let y = (index / self.extent.width) % self.extent.height;
        let x = index / (self.extent.width * self.extent.height);
        VoxelCoords::new(x as i32, y as i32, z as i32)
    }
}

impl<T: Copy> VoxelGrid<T> {
    /// Returns the value at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] outside the extent.
    pub fn get(&self, coords: VoxelCoords) -> GridResult<T> {
        self.get_ref(coords).copied()
    }
}
