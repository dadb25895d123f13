//! Whole-frame coverage: every composed frame must tile the outermost
//! footprint without holes, the only overlap being each trim's corner cell.

use std::collections::HashMap;

use glam::Vec2;
use strata_config::ClipmapConfig;
use strata_lod::{ClipmapResources, DrawInstruction, LevelDescriptor, ViewerState};
use strata_mesh::{MeshRole, TileDim};

const VIEWS: [Vec2; 7] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.5, 0.5),
    Vec2::new(5.25, -3.75),
    Vec2::new(-17.5, 9.125),
    Vec2::new(130.25, 5.75),
    Vec2::new(-1.0, -1.0),
    Vec2::new(7.875, -0.125),
];

/// Sample offset inside each unit cell, never on a mesh edge or diagonal.
const SAMPLE: Vec2 = Vec2::new(0.3, 0.6);

fn inside(p: Vec2, [a, b, c]: [Vec2; 3]) -> bool {
    let d = [
        (b - a).perp_dot(p - a),
        (c - b).perp_dot(p - b),
        (a - c).perp_dot(p - c),
    ];
    d.iter().all(|&x| x > 0.0) || d.iter().all(|&x| x < 0.0)
}

/// Count, per unit cell, how many frame triangles contain the cell's sample point.
fn sample_hits(
    resources: &ClipmapResources,
    frame: &[DrawInstruction],
) -> HashMap<(i32, i32), u32> {
    let mut hits = HashMap::new();
    for instruction in frame.iter().filter(|i| i.role != MeshRole::Seam) {
        let mesh = resources.meshes().get(instruction.role);
        for local in mesh.triangle_positions() {
            let world = local.map(|p| instruction.transform_point(p));
            let min = world[0].min(world[1]).min(world[2]).floor();
            let max = world[0].max(world[1]).max(world[2]).ceil();
            for j in min.y as i32..max.y as i32 {
                for i in min.x as i32..max.x as i32 {
                    let p = Vec2::new(i as f32, j as f32) + SAMPLE;
                    if inside(p, world) {
                        *hits.entry((i, j)).or_insert(0) += 1;
                    }
                }
            }
        }
    }
    hits
}

fn check_coverage(tile_dim: u32, num_levels: u32) {
    let config = ClipmapConfig::new(tile_dim, num_levels, true).unwrap();
    let resources = ClipmapResources::new(config).unwrap();
    let outer = LevelDescriptor::new(num_levels - 1, TileDim::new(tile_dim).unwrap());
    let expected_overlap: usize = (0..num_levels - 1).map(|l| 1usize << (2 * l)).sum();

    for view in VIEWS {
        let frame = resources.compose(&ViewerState::new(view));
        let hits = sample_hits(&resources, &frame);
        let (lo, hi) = outer.footprint(view);
        let (lo, hi) = (lo.as_ivec2(), hi.as_ivec2());

        let mut doubled = 0;
        for j in lo.y - 3..hi.y + 3 {
            for i in lo.x - 3..hi.x + 3 {
                let count = hits.get(&(i, j)).copied().unwrap_or(0);
                let in_footprint = (lo.x..hi.x).contains(&i) && (lo.y..hi.y).contains(&j);
                if in_footprint {
                    assert!(
                        (1..=2).contains(&count),
                        "T={tile_dim} N={num_levels} view={view}: cell ({i},{j}) hit {count} times"
                    );
                    if count == 2 {
                        doubled += 1;
                    }
                } else {
                    assert_eq!(
                        count, 0,
                        "T={tile_dim} N={num_levels} view={view}: cell ({i},{j}) outside footprint"
                    );
                }
            }
        }
        assert_eq!(
            doubled, expected_overlap,
            "T={tile_dim} N={num_levels} view={view}: unexpected overlap"
        );
    }
}

#[test]
fn test_frame_coverage_small() {
    check_coverage(2, 3);
}

#[test]
fn test_frame_coverage_odd_tile() {
    check_coverage(3, 4);
}

#[test]
fn test_frame_coverage_single_level() {
    check_coverage(2, 1);
}

#[test]
fn test_frame_coverage_two_levels() {
    check_coverage(4, 2);
}

/// Seams trace the boundary of the coarser level's hole and enclose no area.
#[test]
fn test_seams_lie_on_level_boundary() {
    let tile_dim = 3u32;
    let config = ClipmapConfig::new(tile_dim, 4, true).unwrap();
    let resources = ClipmapResources::new(config).unwrap();
    let seam = resources.meshes().get(MeshRole::Seam);

    for view in VIEWS {
        let frame = resources.compose(&ViewerState::new(view));
        for instruction in frame.iter().filter(|i| i.role == MeshRole::Seam) {
            let coarse =
                LevelDescriptor::new(instruction.level + 1, TileDim::new(tile_dim).unwrap());
            let next = coarse.snap(view);
            let s = instruction.scale;
            let t = tile_dim as f32;
            let lo = next - Vec2::splat(2.0 * t * s);
            let hi = next + Vec2::splat((2.0 * t + 2.0) * s);

            for vertex in seam.vertices() {
                let p = instruction.transform_point(vertex.ground_xz());
                let on_x = p.x == lo.x || p.x == hi.x;
                let on_z = p.y == lo.y || p.y == hi.y;
                assert!(on_x || on_z, "seam vertex {p} off the boundary");
                assert!(p.cmpge(lo).all() && p.cmple(hi).all());
            }
            for world in seam
                .triangle_positions()
                .map(|tri| tri.map(|p| instruction.transform_point(p)))
            {
                assert_eq!((world[1] - world[0]).perp_dot(world[2] - world[0]), 0.0);
            }
        }
    }
}
