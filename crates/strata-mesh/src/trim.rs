//! The L-shaped trim closing the notch between two levels.
//!
//! A level's footprint is `4T+1` cells wide while the hole in the next coarser
//! ring is `4T+2` cells of the finer level wide, so one row and one column of
//! finer cells is always left over. Which two sides they fall on depends on
//! how the two levels snapped; the renderer picks one of four rotations of
//! this single canonical mesh.

use crate::builder::{MeshBuilder, StripAxis};
use crate::mesh::{ClipmapMesh, MeshRole, TileDim};

/// Cells along each trim bar.
pub fn trim_bar_cells(tile_dim: TileDim) -> u32 {
    4 * tile_dim.get() + 2
}

/// Build the trim mesh.
///
/// Two one-cell-deep bars of `4T+2` cells, one along the low-x edge and one
/// along the low-z edge of a `(4T+2)`-wide square, sharing the corner cell.
/// The square is shifted so its center sits at `(-0.5, -0.5)`; with the
/// renderer placing the mesh at `snapped + scale/2`, the unrotated trim covers
/// `[snapped - (2T+1), snapped + 2T+1]` in level units and each quarter turn
/// moves that window by one cell.
///
/// `4(4T+3)` vertices, `12(4T+2)` indices.
pub fn trim_mesh(tile_dim: TileDim) -> ClipmapMesh {
    let cells = trim_bar_cells(tile_dim);
    let pairs = cells + 1;
    let mut builder = MeshBuilder::with_capacity((4 * pairs) as usize, (12 * cells) as usize);

    builder.push_strip(StripAxis::Z, 0, cells, 0);
    builder.push_strip(StripAxis::X, 0, cells, 0);

    let shift = -(0.5 * (cells + 1) as f32);
    builder.translate(shift, shift);

    builder.finish(MeshRole::Trim, tile_dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_trim_counts() {
        for t in [2u32, 3, 64, 255] {
            let mesh = trim_mesh(TileDim::new(t).unwrap());
            assert_eq!(mesh.vertex_count(), (2 * 2 * (4 * t + 3)) as usize);
            assert_eq!(mesh.index_count(), (2 * 6 * (4 * t + 2)) as usize);
        }
    }

    #[test]
    fn test_trim_bounds_centered_half_cell_low() {
        let t = 2;
        let mesh = trim_mesh(TileDim::new(t).unwrap());
        let (min, max) = mesh.local_bounds();
        let half = (2 * t + 1) as f32;
        assert_eq!(min, Vec2::splat(-half - 0.5));
        assert_eq!(max, Vec2::splat(half - 0.5));
        assert_eq!((min + max) * 0.5, Vec2::splat(-0.5));
    }

    /// Every vertex sits on the low-x column or the low-z row of the square.
    #[test]
    fn test_trim_is_l_shaped() {
        let mesh = trim_mesh(TileDim::new(3).unwrap());
        let (min, _) = mesh.local_bounds();
        for v in mesh.vertices() {
            let p = v.ground_xz() - min;
            assert!(p.x <= 1.0 || p.y <= 1.0, "vertex {p} outside the L");
        }
    }

    #[test]
    fn test_trim_triangles_are_unit_half_cells() {
        let mesh = trim_mesh(TileDim::new(2).unwrap());
        for [a, b, c] in mesh.triangle_positions() {
            assert_eq!((b - a).perp_dot(c - a), -1.0);
        }
    }
}
