//! Owned clipmap state: the active config with the meshes and placement table
//! built from it, rebuilt selectively when the config changes.

use strata_config::{ClipmapConfig, ConfigError};
use strata_mesh::{ClipmapMeshes, TileDim};
use tracing::{debug, info, warn};

use crate::composer::ClipmapComposer;
use crate::instruction::DrawInstruction;
use crate::placement::PlacementOffsetTable;
use crate::viewer::ViewerState;

/// What [`ClipmapResources::apply_config`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigChange {
    /// The new config equals the active one.
    Unchanged,
    /// The config was swapped in.
    Updated {
        /// The five meshes were regenerated.
        meshes_rebuilt: bool,
        /// The placement table was recomputed.
        table_rebuilt: bool,
    },
}

/// The active configuration and every artifact derived from it.
///
/// The three are always mutually consistent; a rejected config leaves the
/// previous set in place.
#[derive(Clone, Debug)]
pub struct ClipmapResources {
    config: ClipmapConfig,
    meshes: ClipmapMeshes,
    table: PlacementOffsetTable,
}

impl ClipmapResources {
    /// Validate `config` and build its meshes and placement table.
    pub fn new(config: ClipmapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tile_dim = TileDim::new(config.tile_dim)?;
        let meshes = ClipmapMeshes::build(tile_dim);
        let table = PlacementOffsetTable::build(tile_dim, config.num_levels)?;
        info!(
            tile_dim = config.tile_dim,
            num_levels = config.num_levels,
            seams = config.seams_enabled,
            "clipmap resources ready"
        );
        Ok(Self {
            config,
            meshes,
            table,
        })
    }

    /// Switch to `config`, rebuilding only what it invalidates.
    ///
    /// Replacements are built before anything is swapped, so on error the
    /// active set is untouched.
    pub fn apply_config(&mut self, config: ClipmapConfig) -> Result<ConfigChange, ConfigError> {
        if config == self.config {
            return Ok(ConfigChange::Unchanged);
        }
        if let Err(err) = config.validate() {
            warn!(%err, "rejected clipmap config, keeping the active one");
            return Err(err);
        }

        let tile_dim = TileDim::new(config.tile_dim)?;
        let meshes_rebuilt = self.config.requires_mesh_rebuild(&config);
        let table_rebuilt = self.config.requires_table_rebuild(&config);

        let meshes = meshes_rebuilt.then(|| ClipmapMeshes::build(tile_dim));
        let table = if table_rebuilt {
            Some(PlacementOffsetTable::build(tile_dim, config.num_levels)?)
        } else {
            None
        };

        if let Some(meshes) = meshes {
            self.meshes = meshes;
        }
        if let Some(table) = table {
            self.table = table;
        }
        self.config = config;

        debug!(meshes_rebuilt, table_rebuilt, "applied clipmap config");
        Ok(ConfigChange::Updated {
            meshes_rebuilt,
            table_rebuilt,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ClipmapConfig {
        &self.config
    }

    /// The mesh set for the active tile resolution.
    pub fn meshes(&self) -> &ClipmapMeshes {
        &self.meshes
    }

    /// The placement table for the active config.
    pub fn table(&self) -> &PlacementOffsetTable {
        &self.table
    }

    /// A composer bound to the active set.
    pub fn composer(&self) -> ClipmapComposer<'_> {
        ClipmapComposer::new(&self.config, &self.meshes, &self.table)
    }

    /// Compose one frame for `viewer`.
    pub fn compose(&self, viewer: &ViewerState) -> Vec<DrawInstruction> {
        self.composer().compose(viewer)
    }

    /// Compose one frame for `viewer` into a reused buffer.
    pub fn compose_into(&self, viewer: &ViewerState, out: &mut Vec<DrawInstruction>) {
        self.composer().compose_into(viewer, out);
    }
}
