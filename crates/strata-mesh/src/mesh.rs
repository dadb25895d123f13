//! Clipmap mesh data structures: roles, the validated tile resolution, and
//! the immutable mesh container handed to the upload step.

use std::fmt;

use glam::Vec2;
use strata_config::{ConfigError, TILE_DIM_RANGE};

use crate::vertex::ClipmapVertex;

/// The five mesh topologies that make up one clipmap ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshRole {
    /// Regular `T x T` grid patch.
    Tile,
    /// Four one-cell-wide arms closing the gap between a ring's tiles.
    Filler,
    /// The `+` shaped patch directly beneath the viewer.
    Cross,
    /// L-shaped strip between two levels with disagreeing snap points.
    Trim,
    /// Degenerate triangle loop hiding T-junction cracks between levels.
    Seam,
}

impl MeshRole {
    /// All roles, in buffer order.
    pub const ALL: [MeshRole; 5] = [
        MeshRole::Tile,
        MeshRole::Filler,
        MeshRole::Cross,
        MeshRole::Trim,
        MeshRole::Seam,
    ];

    /// Stable lowercase name, used in logs and buffer labels.
    pub fn name(self) -> &'static str {
        match self {
            MeshRole::Tile => "tile",
            MeshRole::Filler => "filler",
            MeshRole::Cross => "cross",
            MeshRole::Trim => "trim",
            MeshRole::Seam => "seam",
        }
    }

    /// Index into [`MeshRole::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MeshRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile resolution that has passed range validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileDim(u32);

impl TileDim {
    /// Validate a raw tile resolution.
    pub fn new(value: u32) -> Result<Self, ConfigError> {
        if TILE_DIM_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::TileDimOutOfRange { value })
        }
    }

    /// The raw cell count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TileDim {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// An immutable CPU-side mesh: ground-plane vertices plus a triangle list.
///
/// Built once per tile resolution and never patched; a resolution change
/// replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipmapMesh {
    role: MeshRole,
    tile_dim: TileDim,
    vertices: Vec<ClipmapVertex>,
    indices: Vec<u32>,
}

impl ClipmapMesh {
    pub(crate) fn from_parts(
        role: MeshRole,
        tile_dim: TileDim,
        vertices: Vec<ClipmapVertex>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(indices.len() % 3, 0, "{role} index count not a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "{role} index out of range"
        );
        Self {
            role,
            tile_dim,
            vertices,
            indices,
        }
    }

    /// Which topology this mesh holds.
    pub fn role(&self) -> MeshRole {
        self.role
    }

    /// The tile resolution this mesh was built for.
    pub fn tile_dim(&self) -> TileDim {
        self.tile_dim
    }

    /// Vertex buffer.
    pub fn vertices(&self) -> &[ClipmapVertex] {
        &self.vertices
    }

    /// Index buffer (triangles, 3 indices per triangle).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate the index buffer as triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Iterate triangles as ground-plane corner positions.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.triangles().map(|[a, b, c]| {
            [
                self.vertices[a as usize].ground_xz(),
                self.vertices[b as usize].ground_xz(),
                self.vertices[c as usize].ground_xz(),
            ]
        })
    }

    /// Axis-aligned ground-plane bounds `(min, max)` of the vertices.
    pub fn local_bounds(&self) -> (Vec2, Vec2) {
        self.vertices.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), v| (min.min(v.ground_xz()), max.max(v.ground_xz())),
        )
    }

    /// Vertex buffer as raw bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_dim_validation() {
        assert_eq!(TileDim::new(2).unwrap().get(), 2);
        assert_eq!(TileDim::try_from(255).unwrap().get(), 255);
        assert!(matches!(
            TileDim::new(1),
            Err(ConfigError::TileDimOutOfRange { value: 1 })
        ));
        assert!(TileDim::new(256).is_err());
    }

    #[test]
    fn test_role_order_matches_index() {
        for (i, role) in MeshRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
        assert_eq!(MeshRole::Seam.to_string(), "seam");
    }

    #[test]
    fn test_accessors_and_bytes() {
        let dim = TileDim::new(2).unwrap();
        let mesh = ClipmapMesh::from_parts(
            MeshRole::Tile,
            dim,
            vec![
                ClipmapVertex::ground(0.0, 0.0),
                ClipmapVertex::ground(0.0, 1.0),
                ClipmapVertex::ground(1.0, 0.0),
            ],
            vec![0, 1, 2],
        );
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_bytes().len(), 36);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
        assert_eq!(
            mesh.local_bounds(),
            (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
        );
    }
}
