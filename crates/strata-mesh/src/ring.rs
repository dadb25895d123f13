//! One-cell-wide strip meshes placed along a ring's center lines.
//!
//! Both meshes live in level-local units with the level's snapped position at
//! the origin. Ring tiles leave the lines `x in [0, 1]` and `z in [0, 1]`
//! open; the filler covers them outside the inner `[-T, T+1]` square and the
//! cross covers them inside it.

use crate::builder::{MeshBuilder, StripAxis};
use crate::mesh::{ClipmapMesh, MeshRole, TileDim};

/// Build the filler mesh: four arms of `T` cells each, spanning
/// `[T+1, 2T+1]` and `[-2T, -T]` along both axes.
///
/// `8(T+1)` vertices, `24T` indices.
pub fn filler_mesh(tile_dim: TileDim) -> ClipmapMesh {
    let t = tile_dim.get();
    let ti = t as i32;
    let mut builder = MeshBuilder::with_capacity((8 * (t + 1)) as usize, (24 * t) as usize);

    builder.push_strip(StripAxis::X, ti + 1, t, 0);
    builder.push_strip(StripAxis::Z, ti + 1, t, 0);
    builder.push_strip(StripAxis::X, -2 * ti, t, 0);
    builder.push_strip(StripAxis::Z, -2 * ti, t, 0);

    builder.finish(MeshRole::Filler, tile_dim)
}

/// Build the cross mesh: a horizontal bar over `x in [-T, T+1]` and a
/// vertical bar over `z in [-T, T+1]`, with the shared center cell emitted once.
///
/// `8(T+1)` vertices, `24T + 6` indices.
pub fn cross_mesh(tile_dim: TileDim) -> ClipmapMesh {
    let t = tile_dim.get();
    let ti = t as i32;
    let cells = 2 * t + 1;
    let mut builder = MeshBuilder::with_capacity((8 * (t + 1)) as usize, (24 * t + 6) as usize);

    builder.push_strip(StripAxis::X, -ti, cells, 0);
    builder.push_strip_with(StripAxis::Z, -ti, cells, 0, |i| i == t);

    builder.finish(MeshRole::Cross, tile_dim)
}
