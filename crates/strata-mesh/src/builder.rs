//! Shared vertex/index emission for the clipmap generators.
//!
//! All generators emit cells with the same winding as [`crate::tile_mesh`]:
//! for a cell with corners `a = (u0, v0)`, `b = (u1, v0)`, `c = (u0, v1)`,
//! `d = (u1, v1)` the triangles are `(a, c, b)` and `(c, d, b)`.

use crate::mesh::{ClipmapMesh, MeshRole, TileDim};
use crate::vertex::ClipmapVertex;

/// Axis a strip runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StripAxis {
    /// Strip runs along +x and is one cell deep in z.
    X,
    /// Strip runs along +z and is one cell deep in x.
    Z,
}

pub(crate) struct MeshBuilder {
    vertices: Vec<ClipmapVertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub(crate) fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub(crate) fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub(crate) fn push_vertex(&mut self, x: f32, z: f32) -> u32 {
        let index = self.vertex_count();
        self.vertices.push(ClipmapVertex::ground(x, z));
        index
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Push the two triangles of one cell given its corner vertices.
    pub(crate) fn push_cell(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, c, b, c, d, b]);
    }

    /// Push a one-cell-deep strip of `cells` cells starting at `start` along
    /// `axis`, with its shallow side spanning `[across, across + 1]`.
    ///
    /// Emits `cells + 1` vertex pairs. Cells for which `skip` returns `true`
    /// get their vertices but no triangles.
    pub(crate) fn push_strip_with(
        &mut self,
        axis: StripAxis,
        start: i32,
        cells: u32,
        across: i32,
        skip: impl Fn(u32) -> bool,
    ) {
        let base = self.vertex_count();
        for i in 0..=cells {
            let along = (start + i as i32) as f32;
            let near = across as f32;
            let far = (across + 1) as f32;
            match axis {
                StripAxis::X => {
                    self.push_vertex(along, near);
                    self.push_vertex(along, far);
                }
                StripAxis::Z => {
                    self.push_vertex(near, along);
                    self.push_vertex(far, along);
                }
            }
        }

        for i in (0..cells).filter(|&i| !skip(i)) {
            let pair = base + 2 * i;
            match axis {
                // Pair layout: (along, near), (along, far).
                StripAxis::X => self.push_cell(pair, pair + 2, pair + 1, pair + 3),
                // Pair layout: (near, along), (far, along).
                StripAxis::Z => self.push_cell(pair, pair + 1, pair + 2, pair + 3),
            }
        }
    }

    pub(crate) fn push_strip(&mut self, axis: StripAxis, start: i32, cells: u32, across: i32) {
        self.push_strip_with(axis, start, cells, across, |_| false);
    }

    /// Shift every vertex emitted so far.
    pub(crate) fn translate(&mut self, dx: f32, dz: f32) {
        for v in &mut self.vertices {
            v.position[0] += dx;
            v.position[2] += dz;
        }
    }

    pub(crate) fn finish(self, role: MeshRole, tile_dim: TileDim) -> ClipmapMesh {
        ClipmapMesh::from_parts(role, tile_dim, self.vertices, self.indices)
    }
}
