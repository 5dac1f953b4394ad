//! # Layout Configuration
//!
//! Level dimensions and floor constraints. Usually loaded once at startup
//! from a TOML file; every field is optional and falls back to the default
//! level.
//!
//! ```toml
//! length = 12
//! height = 4
//! width = 8
//! min_floor_length = 3
//! min_floor_width = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxenv_core::GridExtent;

use crate::error::{LayoutError, LayoutResult};

/// Default level length (x).
pub const DEFAULT_LENGTH: usize = 5;
/// Default level height (y).
pub const DEFAULT_HEIGHT: usize = 4;
/// Default level width (z).
pub const DEFAULT_WIDTH: usize = 4;

/// Smallest length with an interior between two wall columns.
pub const MIN_WALLED_LENGTH: usize = 3;
/// Smallest width with an interior between two wall columns.
pub const MIN_WALLED_WIDTH: usize = 3;
/// Smallest height with a layer above the floor.
pub const MIN_WALLED_HEIGHT: usize = 2;

/// Level layout configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Cells along x.
    pub length: usize,
    /// Cells along y.
    pub height: usize,
    /// Cells along z.
    pub width: usize,
    /// Minimum floor footprint along x.
    pub min_floor_length: usize,
    /// Minimum floor footprint along z.
    pub min_floor_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            min_floor_length: 1,
            min_floor_width: 1,
        }
    }
}

impl LayoutConfig {
    /// Config for a level of the given dimensions with a 1x1 minimum floor.
    #[must_use]
    pub fn with_extent(length: usize, height: usize, width: usize) -> Self {
        Self {
            length,
            height,
            width,
            ..Self::default()
        }
    }

    /// Sets the minimum floor footprint.
    #[must_use]
    pub const fn with_min_floor(mut self, length: usize, width: usize) -> Self {
        self.min_floor_length = length;
        self.min_floor_width = width;
        self
    }

    /// Grid extent described by this config.
    #[inline]
    #[must_use]
    pub const fn extent(&self) -> GridExtent {
        GridExtent::new(self.length, self.height, self.width)
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML, unknown keys, or values
    /// rejected by [`LayoutConfig::validate`].
    pub fn from_toml_str(text: &str) -> LayoutResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or its contents
    /// are rejected by [`LayoutConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LayoutError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded layout config from {}: {}", path.display(), config.extent());
        Ok(config)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> LayoutResult<String> {
        toml::to_string(self).map_err(|e| LayoutError::InvalidConfig(e.to_string()))
    }

    /// Checks that the level can hold walls, an interior and the minimum floor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first violated constraint.
    pub fn validate(&self) -> LayoutResult<()> {
        let max_axis = i32::MAX as usize;
        if self.length > max_axis || self.height > max_axis || self.width > max_axis {
            return Err(LayoutError::InvalidConfig(format!(
                "level {} exceeds the addressable range",
                self.extent()
            )));
        }
        if self.length < MIN_WALLED_LENGTH
            || self.width < MIN_WALLED_WIDTH
            || self.height < MIN_WALLED_HEIGHT
        {
            return Err(LayoutError::InvalidConfig(format!(
                "level {} is smaller than {}",
                self.extent(),
                GridExtent::new(MIN_WALLED_LENGTH, MIN_WALLED_HEIGHT, MIN_WALLED_WIDTH)
            )));
        }
        if self.min_floor_length == 0 || self.min_floor_width == 0 {
            return Err(LayoutError::InvalidConfig(
                "minimum floor footprint must be at least 1x1".to_string(),
            ));
        }
        if self.min_floor_length > self.length || self.min_floor_width > self.width {
            return Err(LayoutError::InvalidConfig(format!(
                "minimum floor {}x{} does not fit level {}",
                self.min_floor_length,
                self.min_floor_width,
                self.extent()
            )));
        }
        if self.extent().checked_volume().is_none() {
            return Err(LayoutError::InvalidConfig(format!(
                "level {} volume overflows",
                self.extent()
            )));
        }
        Ok(())
    }
}
