//! The clipmap geometry configuration and its validation rules.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported tile resolutions. The upper bound keeps a tile at most
/// `256 * 256` vertices, so every index fits in 16 bits.
pub const TILE_DIM_RANGE: RangeInclusive<u32> = 2..=255;

/// Supported number of clipmap levels.
pub const LEVEL_COUNT_RANGE: RangeInclusive<u32> = 1..=12;

/// Parameters that shape the clipmap geometry.
///
/// Changing `tile_dim` requires a full mesh rebuild; changing `num_levels`
/// requires a placement table rebuild. `seams_enabled` only affects which
/// instructions are emitted per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ClipmapConfig {
    /// Number of grid cells along one edge of a ring tile.
    pub tile_dim: u32,
    /// Number of concentric rings, each twice the scale of the previous one.
    pub num_levels: u32,
    /// Emit seam meshes between adjacent levels.
    pub seams_enabled: bool,
}

impl Default for ClipmapConfig {
    fn default() -> Self {
        Self {
            tile_dim: 64,
            num_levels: 5,
            seams_enabled: true,
        }
    }
}

impl ClipmapConfig {
    /// Create a config from its three parameters, validating the ranges.
    pub fn new(tile_dim: u32, num_levels: u32, seams_enabled: bool) -> Result<Self, ConfigError> {
        let config = Self {
            tile_dim,
            num_levels,
            seams_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that `tile_dim` and `num_levels` are within their supported ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !TILE_DIM_RANGE.contains(&self.tile_dim) {
            return Err(ConfigError::TileDimOutOfRange {
                value: self.tile_dim,
            });
        }
        if !LEVEL_COUNT_RANGE.contains(&self.num_levels) {
            return Err(ConfigError::LevelCountOutOfRange {
                value: self.num_levels,
            });
        }
        Ok(())
    }

    /// Returns `true` if switching from `self` to `other` changes mesh topology.
    pub fn requires_mesh_rebuild(&self, other: &Self) -> bool {
        self.tile_dim != other.tile_dim
    }

    /// Returns `true` if switching from `self` to `other` changes ring placement.
    pub fn requires_table_rebuild(&self, other: &Self) -> bool {
        self.tile_dim != other.tile_dim || self.num_levels != other.num_levels
    }
}
