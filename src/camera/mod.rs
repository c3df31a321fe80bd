//! First-person free camera.
//!
//! [`integrate`] is the single per-frame update every demo shares; the rest of
//! the module wraps it as a specs component and system and derives the
//! vectors and view matrix the renderer needs.

mod controls;
mod integrator;
mod system;

pub use controls::*;
pub use integrator::*;
pub use system::*;

use glam::{Mat4, Quat, Vec2, Vec3};
use specs::{Component, HashMapStorage};

#[derive(Debug, Clone, Component)]
#[storage(HashMapStorage)]
pub struct FreeCamera {
    pub position: Vec3,
    pub orientation: Quat,
    pub config: CameraConfig,
}

impl FreeCamera {
    pub fn new(position: Vec3, config: CameraConfig) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            config,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    pub fn integrate(&mut self, held: Controls, mouse_delta: Vec2, delta_seconds: f32) {
        integrate(
            &mut self.orientation,
            &mut self.position,
            held,
            mouse_delta,
            delta_seconds,
            &self.config,
        );
    }
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), CameraConfig::default())
    }
}
