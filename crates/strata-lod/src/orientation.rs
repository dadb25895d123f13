//! Trim orientation: the four quarter-turn rotations of the trim mesh and the
//! selector that picks one per level boundary.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat2, Quat, Vec2};

/// The trim rotation for each 2-bit quadrant code, as exact ground-plane
/// matrices (counter-clockwise from +x towards +z).
///
/// Bit 1 is set when the finer level sits at the low-x half of the coarser
/// cell (trim column needed on the high-x side), bit 0 likewise for z.
pub const TRIM_ROTATIONS: [Mat2; 4] = [
    // 0: column low-x, row low-z
    Mat2::from_cols_array(&[1.0, 0.0, 0.0, 1.0]),
    // 1: column low-x, row high-z (270 degrees)
    Mat2::from_cols_array(&[0.0, -1.0, 1.0, 0.0]),
    // 2: column high-x, row low-z (90 degrees)
    Mat2::from_cols_array(&[0.0, 1.0, -1.0, 0.0]),
    // 3: column high-x, row high-z (180 degrees)
    Mat2::from_cols_array(&[-1.0, 0.0, 0.0, -1.0]),
];

const QUARTER_TURNS: [u8; 4] = [0, 3, 1, 2];

/// A ground-plane rotation applied to a mesh instance, identified by its
/// quadrant code. Only the trim uses anything but [`Orientation::IDENTITY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation(u8);

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Self = Self(0);

    /// All four orientations in code order.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Orientation for a 2-bit quadrant code; `None` if `code > 3`.
    pub fn from_code(code: u8) -> Option<Self> {
        (code < 4).then_some(Self(code))
    }

    /// The 2-bit quadrant code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Counter-clockwise quarter turns in the ground plane.
    pub fn quarter_turns(self) -> u8 {
        QUARTER_TURNS[self.0 as usize]
    }

    /// Rotation angle in degrees, in `[0, 360)`.
    pub fn degrees(self) -> f32 {
        self.quarter_turns() as f32 * 90.0
    }

    /// The exact 2x2 rotation matrix.
    pub fn matrix(self) -> Mat2 {
        TRIM_ROTATIONS[self.0 as usize]
    }

    /// Rotate a ground-plane point.
    pub fn rotate(self, p: Vec2) -> Vec2 {
        self.matrix() * p
    }

    /// The same rotation about the vertical (+y) axis, acting on `(x, 0, z)`.
    pub fn quat(self) -> Quat {
        // A positive y rotation turns +x towards -z, the opposite sense.
        Quat::from_rotation_y(-(self.quarter_turns() as f32) * FRAC_PI_2)
    }
}

/// Pick the trim orientation for the boundary between level `L` (cell size
/// `scale`, snapped to `snapped`) and level `L+1` (snapped to `next_snapped`).
///
/// With `d = view - next_snapped`, the finer level sits in the high half of
/// the coarser cell along an axis when `d >= scale` there, leaving its
/// uncovered column (or row) on the low side. The result only depends on
/// `view` modulo `2 * scale`.
pub fn select_trim_orientation(
    view: Vec2,
    snapped: Vec2,
    next_snapped: Vec2,
    scale: f32,
) -> Orientation {
    debug_assert!(
        snapped.cmpge(next_snapped).all(),
        "level snapped below the coarser level: {snapped} < {next_snapped}"
    );
    let d = view - next_snapped;
    let mut code = 0u8;
    if d.x < scale {
        code |= 2;
    }
    if d.y < scale {
        code |= 1;
    }
    Orientation(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::snap_to_grid;
    use glam::Vec3;

    fn select(view: Vec2, scale: f32) -> Orientation {
        let snapped = snap_to_grid(view, scale);
        let next = snap_to_grid(view, scale * 2.0);
        select_trim_orientation(view, snapped, next, scale)
    }

    #[test]
    fn test_quadrant_codes() {
        assert_eq!(select(Vec2::new(1.5, 1.5), 1.0).code(), 0);
        assert_eq!(select(Vec2::new(1.5, 0.5), 1.0).code(), 1);
        assert_eq!(select(Vec2::new(0.5, 1.5), 1.0).code(), 2);
        assert_eq!(select(Vec2::new(0.5, 0.5), 1.0).code(), 3);
    }

    #[test]
    fn test_cell_boundary_belongs_to_high_half() {
        assert_eq!(select(Vec2::new(6.0, 6.0), 2.0).code(), 0);
        assert_eq!(select(Vec2::new(5.999, 6.0), 2.0).code(), 2);
        assert_eq!(select(Vec2::new(6.0, 5.999), 2.0).code(), 1);
    }

    /// Translating the view by whole coarser cells does not change the code.
    #[test]
    fn test_periodic_in_twice_scale() {
        let views = [
            Vec2::new(0.25, 0.75),
            Vec2::new(1.5, 0.125),
            Vec2::new(3.0, 2.5),
            Vec2::new(-0.75, 1.25),
        ];
        for level in 0..5 {
            let scale = (1u32 << level) as f32;
            let period = 2.0 * scale;
            for view in views {
                let view = view * scale;
                let base = select(view, scale);
                for (kx, ky) in [(1, 0), (0, 1), (-3, 2), (17, -5), (-64, -64)] {
                    let moved = view + Vec2::new(kx as f32, ky as f32) * period;
                    assert_eq!(select(moved, scale), base, "level {level} view {view}");
                }
            }
        }
    }

    #[test]
    fn test_codes_roundtrip() {
        for orientation in Orientation::ALL {
            assert_eq!(Orientation::from_code(orientation.code()), Some(orientation));
        }
        assert_eq!(Orientation::from_code(4), None);
        assert_eq!(Orientation::default(), Orientation::IDENTITY);
    }

    #[test]
    fn test_rotation_set_is_the_four_quarter_turns() {
        let mut degrees: Vec<f32> = Orientation::ALL.iter().map(|o| o.degrees()).collect();
        degrees.sort_by(f32::total_cmp);
        assert_eq!(degrees, vec![0.0, 90.0, 180.0, 270.0]);
        for o in Orientation::ALL {
            assert_eq!(o.matrix().determinant(), 1.0);
        }
    }

    #[test]
    fn test_matrix_rotates_counter_clockwise() {
        let p = Vec2::new(1.0, 0.0);
        assert_eq!(Orientation::IDENTITY.rotate(p), p);
        assert_eq!(Orientation::ALL[2].rotate(p), Vec2::new(0.0, 1.0));
        assert_eq!(Orientation::ALL[3].rotate(p), Vec2::new(-1.0, 0.0));
        assert_eq!(Orientation::ALL[1].rotate(p), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_quat_matches_matrix_on_ground_plane() {
        let p = Vec2::new(3.0, -2.0);
        for o in Orientation::ALL {
            let planar = o.rotate(p);
            let spatial = o.quat() * Vec3::new(p.x, 0.0, p.y);
            assert!((spatial.x - planar.x).abs() < 1e-5, "{o:?}");
            assert!(spatial.y.abs() < 1e-5);
            assert!((spatial.z - planar.y).abs() < 1e-5, "{o:?}");
        }
    }
}
