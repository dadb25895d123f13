//! The seam loop hiding cracks along a level boundary.
//!
//! The coarser ring's inner edge has one vertex per two vertices of the finer
//! level. The seam traces that edge at the finer density and fans each pair of
//! finer edge segments into a triangle whose apex is the odd vertex. The
//! triangles have no area in plan view; once heights are applied they fill the
//! vertical crack between the two levels.

use crate::builder::MeshBuilder;
use crate::mesh::{ClipmapMesh, MeshRole, TileDim};

/// Vertices along one edge of the seam square (`4T+2`).
pub fn seam_edge_vertices(tile_dim: TileDim) -> u32 {
    4 * tile_dim.get() + 2
}

/// Build the seam mesh: `4(4T+2)` vertices walking counter-clockwise around
/// a `(4T+2)`-wide square from the origin, and `6(4T+2)` indices; the last
/// triangle wraps back to vertex 0.
pub fn seam_mesh(tile_dim: TileDim) -> ClipmapMesh {
    let n = seam_edge_vertices(tile_dim);
    let side = n as f32;
    let loop_len = 4 * n;
    let mut builder = MeshBuilder::with_capacity(loop_len as usize, (6 * n) as usize);

    for i in 0..n {
        builder.push_vertex(i as f32, 0.0);
    }
    for i in 0..n {
        builder.push_vertex(side, i as f32);
    }
    for i in 0..n {
        builder.push_vertex(side - i as f32, side);
    }
    for i in 0..n {
        builder.push_vertex(0.0, side - i as f32);
    }

    for i in (0..loop_len).step_by(2) {
        builder.push_triangle(i + 1, i, (i + 2) % loop_len);
    }

    builder.finish(MeshRole::Seam, tile_dim)
}
