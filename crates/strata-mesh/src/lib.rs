//! CPU-side mesh generation for geometry clipmaps.
//!
//! Builds the five topologies one clipmap ring is assembled from (tile,
//! filler, cross, trim and seam), each a pure function of the tile
//! resolution. Vertices lie on the ground plane; the renderer applies height.

mod builder;
pub mod factory;
pub mod mesh;
pub mod ring;
pub mod seam;
pub mod tile;
pub mod trim;
pub mod vertex;

pub use factory::ClipmapMeshes;
pub use mesh::{ClipmapMesh, MeshRole, TileDim};
pub use ring::{cross_mesh, filler_mesh};
pub use seam::{seam_edge_vertices, seam_mesh};
pub use tile::tile_mesh;
pub use trim::{trim_bar_cells, trim_mesh};
pub use vertex::{CLIPMAP_VERTEX_STRIDE, ClipmapVertex};
