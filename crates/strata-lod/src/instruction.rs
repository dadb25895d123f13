//! Per-frame draw instructions handed to the external renderer.

use glam::{Mat4, Vec2, Vec3};
use strata_mesh::{ClipmapMeshes, MeshRole};

use crate::orientation::Orientation;

/// One mesh instance to draw this frame.
///
/// Produced fresh by every composition pass and never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    /// Which mesh buffer to bind.
    pub role: MeshRole,
    /// Clipmap level the instance belongs to (cross and inner tiles are level 0).
    pub level: u32,
    /// Ground-plane rotation, identity for everything but the trim.
    pub rotation: Orientation,
    /// Uniform ground-plane scale, `2^level`.
    pub scale: f32,
    /// World-space ground-plane translation `(x, z)`.
    pub translation: Vec2,
}

impl DrawInstruction {
    /// An unrotated instance.
    pub fn new(role: MeshRole, level: u32, scale: f32, translation: Vec2) -> Self {
        Self {
            role,
            level,
            rotation: Orientation::IDENTITY,
            scale,
            translation,
        }
    }

    /// The same instance with a rotation applied.
    pub fn with_rotation(mut self, rotation: Orientation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Map a mesh-local ground point to world space: rotate, scale, translate.
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.translation + self.rotation.rotate(local) * self.scale
    }

    /// Model matrix acting on `(x, y, z)` mesh positions; height is left unscaled.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.scale, 1.0, self.scale),
            self.rotation.quat(),
            Vec3::new(self.translation.x, 0.0, self.translation.y),
        )
    }

    /// Pack the instance for a uniform or instance buffer.
    pub fn uniform(&self, level_colors: bool) -> DrawUniform {
        DrawUniform {
            model: self.model_matrix().to_cols_array_2d(),
            color: if level_colors {
                level_debug_color(self.level)
            } else {
                [1.0; 4]
            },
        }
    }
}

/// GPU-side per-draw data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// RGBA tint.
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(DrawUniform, [u8; 80]);

const LEVEL_PALETTE: [[f32; 4]; 6] = [
    [0.90, 0.30, 0.25, 1.0],
    [0.95, 0.65, 0.20, 1.0],
    [0.85, 0.85, 0.30, 1.0],
    [0.35, 0.80, 0.40, 1.0],
    [0.30, 0.60, 0.90, 1.0],
    [0.60, 0.40, 0.85, 1.0],
];

/// Debug tint for a clipmap level; the palette repeats every six levels.
pub fn level_debug_color(level: u32) -> [f32; 4] {
    LEVEL_PALETTE[level as usize % LEVEL_PALETTE.len()]
}

/// Summary of one composed frame, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Instruction count per role, indexed by [`MeshRole::index`].
    pub per_role: [usize; 5],
    /// Triangles submitted across all instructions.
    pub triangles: usize,
}

impl FrameStats {
    /// Tally `instructions` against the mesh set they will be drawn with.
    pub fn from_instructions(instructions: &[DrawInstruction], meshes: &ClipmapMeshes) -> Self {
        let mut stats = Self::default();
        for instruction in instructions {
            stats.per_role[instruction.role.index()] += 1;
            stats.triangles += meshes.get(instruction.role).triangle_count();
        }
        stats
    }

    /// Instructions emitted for `role`.
    pub fn count(&self, role: MeshRole) -> usize {
        self.per_role[role.index()]
    }

    /// Total instructions, i.e. draw calls.
    pub fn draw_calls(&self) -> usize {
        self.per_role.iter().sum()
    }
}
