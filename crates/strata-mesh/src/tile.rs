//! The regular `T x T` grid patch that makes up most of every ring.

use crate::builder::MeshBuilder;
use crate::mesh::{ClipmapMesh, MeshRole, TileDim};

/// Build the tile mesh: `(T+1)^2` row-major vertices at `(x, 0, y)` for
/// `x, y` in `0..=T`, and `6 T^2` indices.
pub fn tile_mesh(tile_dim: TileDim) -> ClipmapMesh {
    let t = tile_dim.get();
    let side = t + 1;
    let mut builder = MeshBuilder::with_capacity((side * side) as usize, (6 * t * t) as usize);

    for y in 0..side {
        for x in 0..side {
            builder.push_vertex(x as f32, y as f32);
        }
    }

    for y in 0..t {
        for x in 0..t {
            let start = y * t + y + x;
            let end = start + t + 1;
            builder.push_triangle(start, end, start + 1);
            builder.push_triangle(end, end + 1, start + 1);
        }
    }

    builder.finish(MeshRole::Tile, tile_dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_tile_counts_small() {
        let mesh = tile_mesh(TileDim::new(2).unwrap());
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.index_count(), 24);
        assert_eq!(&mesh.indices()[..6], &[0, 3, 1, 3, 4, 1]);
    }

    #[test]
    fn test_tile_counts_across_range() {
        for t in [2u32, 3, 7, 64, 255] {
            let mesh = tile_mesh(TileDim::new(t).unwrap());
            assert_eq!(mesh.vertex_count(), ((t + 1) * (t + 1)) as usize);
            assert_eq!(mesh.index_count(), (6 * t * t) as usize);
            let n = mesh.vertex_count() as u32;
            assert!(mesh.indices().iter().all(|&i| i < n));
        }
    }

    /// The largest tile still addresses every vertex with a 16-bit index.
    #[test]
    fn test_max_tile_indices_fit_u16() {
        let mesh = tile_mesh(TileDim::new(255).unwrap());
        let max = mesh.indices().iter().copied().max().unwrap();
        assert!(max <= u16::MAX as u32);
    }

    #[test]
    fn test_tile_is_row_major() {
        let mesh = tile_mesh(TileDim::new(4).unwrap());
        assert_eq!(mesh.vertices()[0].ground_xz(), Vec2::new(0.0, 0.0));
        assert_eq!(mesh.vertices()[4].ground_xz(), Vec2::new(4.0, 0.0));
        assert_eq!(mesh.vertices()[5].ground_xz(), Vec2::new(0.0, 1.0));
        assert_eq!(mesh.local_bounds(), (Vec2::ZERO, Vec2::splat(4.0)));
    }
}
