//! Precomputed tile offsets for every clipmap ring.
//!
//! Each level is a 4x4 arrangement of tiles around the level's snapped
//! position, with a one-cell gap between the second and third column and row
//! (closed by the filler and cross meshes). Column and row starts, in level
//! cells, are `-2T`, `-T`, `1` and `T+1`. The 12 border tiles form the ring;
//! the middle 2x2 belongs to the finer level, or to the cross and inner tiles
//! at level 0.

use glam::Vec2;
use strata_config::{ClipmapConfig, ConfigError, LEVEL_COUNT_RANGE};
use strata_mesh::TileDim;
use tracing::debug;

use crate::level::LevelDescriptor;

/// Number of tiles in one ring.
pub const RING_TILE_COUNT: usize = 12;

/// `(column, row)` of each ring tile, clockwise from the top edge: two along
/// the top, two down the right, four across the bottom, two up the left and
/// the two that complete the top.
pub const RING_TILE_CELLS: [(usize, usize); RING_TILE_COUNT] = [
    (2, 3),
    (3, 3),
    (3, 2),
    (3, 1),
    (3, 0),
    (2, 0),
    (1, 0),
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
];

/// Start, in level cells, of each of the four tile columns (or rows).
pub fn tile_column_starts(tile_dim: TileDim) -> [i32; 4] {
    let t = tile_dim.get() as i32;
    [-2 * t, -t, 1, t + 1]
}

/// Offsets of the four finest tiles around the cross, at unit scale.
pub fn inner_tile_offsets(tile_dim: TileDim) -> [Vec2; 4] {
    let starts = tile_column_starts(tile_dim);
    let (lo, hi) = (starts[1] as f32, starts[2] as f32);
    [
        Vec2::new(lo, lo),
        Vec2::new(hi, lo),
        Vec2::new(lo, hi),
        Vec2::new(hi, hi),
    ]
}

/// Ring tile offsets for every level, relative to that level's snapped position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementOffsetTable {
    tile_dim: TileDim,
    levels: Vec<[Vec2; RING_TILE_COUNT]>,
}

impl PlacementOffsetTable {
    /// Build the table for `num_levels` levels of `tile_dim`-cell tiles.
    pub fn build(tile_dim: TileDim, num_levels: u32) -> Result<Self, ConfigError> {
        if !LEVEL_COUNT_RANGE.contains(&num_levels) {
            return Err(ConfigError::LevelCountOutOfRange { value: num_levels });
        }

        let starts = tile_column_starts(tile_dim);
        let levels = (0..num_levels)
            .map(|level| {
                let scale = LevelDescriptor::new(level, tile_dim).scale;
                RING_TILE_CELLS.map(|(col, row)| {
                    Vec2::new(starts[col] as f32, starts[row] as f32) * scale
                })
            })
            .collect();

        debug!(
            tile_dim = tile_dim.get(),
            num_levels, "built placement offset table"
        );

        Ok(Self { tile_dim, levels })
    }

    /// The tile resolution the offsets were computed for.
    pub fn tile_dim(&self) -> TileDim {
        self.tile_dim
    }

    /// Number of levels in the table.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The 12 ring offsets of `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not below [`Self::level_count`].
    pub fn offsets(&self, level: usize) -> &[Vec2; RING_TILE_COUNT] {
        &self.levels[level]
    }

    /// Iterate levels from finest to coarsest.
    pub fn iter(&self) -> impl Iterator<Item = &[Vec2; RING_TILE_COUNT]> {
        self.levels.iter()
    }
}

/// Validate `config` and compute its placement table.
pub fn compute_placement_table(config: &ClipmapConfig) -> Result<PlacementOffsetTable, ConfigError> {
    config.validate()?;
    PlacementOffsetTable::build(TileDim::new(config.tile_dim)?, config.num_levels)
}
