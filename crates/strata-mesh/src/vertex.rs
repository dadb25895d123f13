//! GPU-facing vertex format for clipmap meshes.
//!
//! Every clipmap vertex lies on the ground plane (`y == 0`); heights are
//! applied by the rendering stage that consumes these buffers.

use glam::Vec2;

/// A single clipmap vertex, laid out for direct upload as `Float32x3`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ClipmapVertex {
    /// Mesh-local position `(x, 0, z)`.
    pub position: [f32; 3],
}

static_assertions::assert_eq_size!(ClipmapVertex, [u8; 12]);

/// Byte stride of [`ClipmapVertex`] in a vertex buffer.
pub const CLIPMAP_VERTEX_STRIDE: u64 = std::mem::size_of::<ClipmapVertex>() as u64;

impl ClipmapVertex {
    /// Construct a vertex on the ground plane.
    pub fn ground(x: f32, z: f32) -> Self {
        Self {
            position: [x, 0.0, z],
        }
    }

    /// The `(x, z)` ground-plane coordinates.
    pub fn ground_xz(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[2])
    }
}
