//! The viewer the clipmap is centered on.

use glam::{Vec2, Vec3};

/// Ground-plane position of the viewer, supplied each frame by the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerState {
    /// `(x, z)` position on the ground plane.
    pub position: Vec2,
}

impl ViewerState {
    /// A viewer at `position`.
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Project a world-space camera position onto the ground plane.
    pub fn from_world(camera: Vec3) -> Self {
        Self::new(Vec2::new(camera.x, camera.z))
    }

    /// Move by `velocity * dt`.
    pub fn advance(&mut self, velocity: Vec2, dt: f32) {
        self.position += velocity * dt;
    }
}
