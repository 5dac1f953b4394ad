//! # Voxel Classification
//!
//! Every cell of a layout grid holds exactly one `VoxelState`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum VoxelState {
    /// Nothing here. Agents may pass through.
    #[default]
    Empty = 0,
    /// Walkable ground at the lowest layer.
    Floor = 1,
    /// Level boundary. Blocks movement.
    Wall = 2,
    /// Goal region marker.
    Exit = 3,
}

impl VoxelState {
    /// All states, in discriminant order.
    pub const ALL: [Self; 4] = [Self::Empty, Self::Floor, Self::Wall, Self::Exit];

    /// Returns true if the cell holds nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the cell blocks movement (floor or wall).
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Floor | Self::Wall)
    }

    /// Converts a raw discriminant back into a state.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Floor),
            2 => Some(Self::Wall),
            3 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for VoxelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(VoxelState::default(), VoxelState::Empty);
        assert!(VoxelState::default().is_empty());
    }

    #[test]
    fn test_solidity() {
        assert!(VoxelState::Floor.is_solid());
        assert!(VoxelState::Wall.is_solid());
        assert!(!VoxelState::Exit.is_solid());
        assert!(!VoxelState::Empty.is_solid());
    }

    #[test]
    fn test_from_u8_matches_discriminants() {
        for state in VoxelState::ALL {
            assert_eq!(VoxelState::from_u8(state as u8), Some(state));
        }
        assert_eq!(VoxelState::from_u8(4), None);
    }
}
