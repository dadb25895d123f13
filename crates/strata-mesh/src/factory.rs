//! The complete set of clipmap meshes for one tile resolution.

use strata_config::{ClipmapConfig, ConfigError};
use tracing::debug;

use crate::mesh::{ClipmapMesh, MeshRole, TileDim};
use crate::{cross_mesh, filler_mesh, seam_mesh, tile_mesh, trim_mesh};

/// All five clipmap topologies built for the same tile resolution.
///
/// The set can only be obtained fully built, so every role is always
/// available; a resolution change builds a new set and replaces the old one
/// in a single assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipmapMeshes {
    tile_dim: TileDim,
    meshes: [ClipmapMesh; 5],
}

impl ClipmapMeshes {
    /// Build every topology for `tile_dim`.
    pub fn build(tile_dim: TileDim) -> Self {
        let meshes = [
            tile_mesh(tile_dim),
            filler_mesh(tile_dim),
            cross_mesh(tile_dim),
            trim_mesh(tile_dim),
            seam_mesh(tile_dim),
        ];

        for mesh in &meshes {
            debug!(
                role = %mesh.role(),
                tile_dim = tile_dim.get(),
                vertices = mesh.vertex_count(),
                indices = mesh.index_count(),
                "built clipmap mesh"
            );
        }

        Self { tile_dim, meshes }
    }

    /// Validate the config's tile resolution and build the set.
    pub fn for_config(config: &ClipmapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(TileDim::new(config.tile_dim)?))
    }

    /// The tile resolution every mesh in the set was built for.
    pub fn tile_dim(&self) -> TileDim {
        self.tile_dim
    }

    /// The mesh for `role`.
    pub fn get(&self, role: MeshRole) -> &ClipmapMesh {
        &self.meshes[role.index()]
    }

    /// Iterate meshes in [`MeshRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &ClipmapMesh> {
        self.meshes.iter()
    }

    /// Total vertex bytes across all five meshes.
    pub fn total_vertex_bytes(&self) -> usize {
        self.meshes.iter().map(|m| m.vertex_bytes().len()).sum()
    }

    /// Total index bytes across all five meshes.
    pub fn total_index_bytes(&self) -> usize {
        self.meshes.iter().map(|m| m.index_bytes().len()).sum()
    }
}
