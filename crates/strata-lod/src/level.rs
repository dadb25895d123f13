//! Per-level geometry: scale, snapping and footprint of one clipmap ring.

use glam::Vec2;
use strata_mesh::TileDim;

/// Derived parameters of clipmap level `L`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelDescriptor {
    /// Level index, 0 being the finest.
    pub level: u32,
    /// World units per grid cell, `2^L`.
    pub scale: f32,
    /// World size of one ring tile, `T << L`.
    pub tile_world_size: u32,
}

impl LevelDescriptor {
    /// Describe level `level` for tiles of `tile_dim` cells.
    pub fn new(level: u32, tile_dim: TileDim) -> Self {
        Self {
            level,
            scale: level_scale(level),
            tile_world_size: tile_dim.get() << level,
        }
    }

    /// The viewer position snapped down to this level's grid.
    pub fn snap(&self, view: Vec2) -> Vec2 {
        snap_to_grid(view, self.scale)
    }

    /// World-space `(min, max)` corners of the square this level covers,
    /// including everything nested inside it.
    ///
    /// The ring spans `4T+1` cells: `2T` below the snapped position and `2T+1` above.
    pub fn footprint(&self, view: Vec2) -> (Vec2, Vec2) {
        let snapped = self.snap(view);
        let tile = self.tile_world_size as f32;
        (
            snapped - Vec2::splat(2.0 * tile),
            snapped + Vec2::splat(2.0 * tile + self.scale),
        )
    }
}

/// `2^level` as a float.
pub fn level_scale(level: u32) -> f32 {
    (1u32 << level) as f32
}

/// Round `view` down, component-wise, to the nearest multiple of `scale`.
///
/// A level's geometry only moves when this value changes, i.e. in steps of
/// `scale`.
pub fn snap_to_grid(view: Vec2, scale: f32) -> Vec2 {
    (view / scale).floor() * scale
}
