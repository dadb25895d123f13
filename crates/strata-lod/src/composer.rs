//! Per-frame clipmap composition.
//!
//! Given the viewer position, emits every mesh instance needed for one
//! crack-free frame: the cross and the four finest tiles under the viewer,
//! then per level the 12 ring tiles, the filler, and (between levels) the
//! trim and seam. Geometry is never regenerated; each level only moves in
//! whole steps of its own scale.

use glam::Vec2;
use strata_config::ClipmapConfig;
use strata_mesh::{ClipmapMeshes, MeshRole};
use tracing::trace;

use crate::instruction::DrawInstruction;
use crate::level::{LevelDescriptor, snap_to_grid};
use crate::orientation::select_trim_orientation;
use crate::placement::{PlacementOffsetTable, RING_TILE_COUNT, inner_tile_offsets};
use crate::viewer::ViewerState;

/// Stateless driver turning a viewer position into draw instructions.
///
/// Borrows the current config, meshes and placement table; nothing persists
/// between calls.
pub struct ClipmapComposer<'a> {
    config: &'a ClipmapConfig,
    meshes: &'a ClipmapMeshes,
    table: &'a PlacementOffsetTable,
}

impl<'a> ClipmapComposer<'a> {
    /// Bind a composer to a config and the artifacts built from it.
    ///
    /// # Panics
    ///
    /// Panics if the meshes or table were built for a different tile
    /// resolution, or the table's level count differs from the config.
    pub fn new(
        config: &'a ClipmapConfig,
        meshes: &'a ClipmapMeshes,
        table: &'a PlacementOffsetTable,
    ) -> Self {
        assert_eq!(
            meshes.tile_dim().get(),
            config.tile_dim,
            "meshes built for a different tile_dim"
        );
        assert_eq!(
            table.tile_dim().get(),
            config.tile_dim,
            "placement table built for a different tile_dim"
        );
        assert_eq!(
            table.level_count(),
            config.num_levels as usize,
            "placement table level count differs from num_levels"
        );
        Self {
            config,
            meshes,
            table,
        }
    }

    /// The mesh set instructions refer to.
    pub fn meshes(&self) -> &'a ClipmapMeshes {
        self.meshes
    }

    /// Number of instructions one frame produces under the bound config.
    pub fn instruction_count(&self) -> usize {
        let levels = self.config.num_levels as usize;
        let boundaries = levels - 1;
        let per_boundary = if self.config.seams_enabled { 2 } else { 1 };
        1 + 4 + levels * (RING_TILE_COUNT + 1) + boundaries * per_boundary
    }

    /// Compose one frame into a fresh list.
    pub fn compose(&self, viewer: &ViewerState) -> Vec<DrawInstruction> {
        let mut instructions = Vec::new();
        self.compose_into(viewer, &mut instructions);
        instructions
    }

    /// Compose one frame into `out`, replacing its contents.
    ///
    /// Emission order only affects overdraw.
    pub fn compose_into(&self, viewer: &ViewerState, out: &mut Vec<DrawInstruction>) {
        out.clear();
        out.reserve(self.instruction_count());

        let view = viewer.position;
        let tile_dim = self.meshes.tile_dim();
        let num_levels = self.config.num_levels;

        // Finest patch under the viewer.
        let origin = view.floor();
        out.push(DrawInstruction::new(MeshRole::Cross, 0, 1.0, origin));
        for offset in inner_tile_offsets(tile_dim) {
            out.push(DrawInstruction::new(MeshRole::Tile, 0, 1.0, origin + offset));
        }

        for (level, offsets) in (0..num_levels).zip(self.table.iter()) {
            let descriptor = LevelDescriptor::new(level, tile_dim);
            let scale = descriptor.scale;
            let snapped = descriptor.snap(view);

            for offset in offsets {
                out.push(DrawInstruction::new(
                    MeshRole::Tile,
                    level,
                    scale,
                    snapped + *offset,
                ));
            }
            out.push(DrawInstruction::new(MeshRole::Filler, level, scale, snapped));

            if level + 1 == num_levels {
                continue;
            }

            let next_snapped = snap_to_grid(view, scale * 2.0);

            let rotation = select_trim_orientation(view, snapped, next_snapped, scale);
            let tile_center = snapped + Vec2::splat(scale * 0.5);
            out.push(
                DrawInstruction::new(MeshRole::Trim, level, scale, tile_center)
                    .with_rotation(rotation),
            );

            if self.config.seams_enabled {
                let next_base = next_snapped - Vec2::splat((tile_dim.get() << (level + 1)) as f32);
                out.push(DrawInstruction::new(MeshRole::Seam, level, scale, next_base));
            }
        }

        trace!(
            view_x = view.x,
            view_z = view.y,
            instructions = out.len(),
            "composed clipmap frame"
        );
    }
}
