use glam::{Mat4, Quat, Vec3};
use specs::{Component, DenseVecStorage, HashMapStorage, Join};

use crate::time::DeltaTime;

#[derive(Debug, Clone, Component)]
#[storage(DenseVecStorage)]
pub struct Transform {
    pub pos: Vec3,
    pub rot: Quat,
    pub scale: Vec3,
    pub matrix: Mat4,
    /// Inverse-transpose of `matrix`, for transforming normals.
    pub normal_matrix: Mat4,
}

impl Transform {
    pub fn from_position(pos: Vec3) -> Self {
        let mut transform = Self {
            pos,
            ..Self::default()
        };
        transform.refresh();
        transform
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self.refresh();
        self
    }

    pub fn matrix_trs(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rot, self.pos)
    }

    /// Recomputes the cached matrices from position, rotation and scale.
    pub fn refresh(&mut self) {
        self.matrix = self.matrix_trs();
        self.normal_matrix = self.matrix.inverse().transpose();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            rot: Quat::IDENTITY,
            scale: Vec3::ONE,
            matrix: Mat4::IDENTITY,
            normal_matrix: Mat4::IDENTITY,
        }
    }
}

/// Constant-rate rotation about a fixed axis.
#[derive(Debug, Clone, Component)]
#[storage(HashMapStorage)]
pub struct Spin {
    axis: Vec3,
    /// Radians per second.
    pub rate: f32,
}

impl Spin {
    /// `axis` need not be normalized, but must be non-zero.
    pub fn new(axis: Vec3, rate: f32) -> Self {
        Self {
            axis: axis.normalize(),
            rate,
        }
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn advance(&self, rot: Quat, delta_seconds: f32) -> Quat {
        (Quat::from_axis_angle(self.axis, self.rate * delta_seconds) * rot).normalize()
    }
}

/// Moves an entity around the origin: `offset` rotated by an accumulated
/// spin.
#[derive(Debug, Clone, Component)]
#[storage(HashMapStorage)]
pub struct Orbit {
    pub spin: Spin,
    pub offset: Vec3,
    pub rotation: Quat,
}

impl Orbit {
    pub fn new(axis: Vec3, rate: f32, offset: Vec3) -> Self {
        Self {
            spin: Spin::new(axis, rate),
            offset,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.rotation * self.offset
    }
}

pub struct SpinSystem;

impl<'a> specs::System<'a> for SpinSystem {
    type SystemData = (
        specs::ReadExpect<'a, DeltaTime>,
        specs::ReadStorage<'a, Spin>,
        specs::WriteStorage<'a, Transform>,
    );

    fn run(&mut self, (delta, spins, mut transforms): Self::SystemData) {
        let dt = delta.seconds();
        for (spin, transform) in (&spins, &mut transforms).join() {
            transform.rot = spin.advance(transform.rot, dt);
        }
    }
}

pub struct OrbitSystem;

impl<'a> specs::System<'a> for OrbitSystem {
    type SystemData = (
        specs::ReadExpect<'a, DeltaTime>,
        specs::WriteStorage<'a, Orbit>,
        specs::WriteStorage<'a, Transform>,
    );

    fn run(&mut self, (delta, mut orbits, mut transforms): Self::SystemData) {
        let dt = delta.seconds();
        for (orbit, transform) in (&mut orbits, &mut transforms).join() {
            orbit.rotation = orbit.spin.advance(orbit.rotation, dt);
            transform.pos = orbit.position();
        }
    }
}

pub struct TransformMatrixSystem;

impl<'a> specs::System<'a> for TransformMatrixSystem {
    type SystemData = specs::WriteStorage<'a, Transform>;

    fn run(&mut self, mut transforms: Self::SystemData) {
        for transform in (&mut transforms).join() {
            transform.refresh();
        }
    }
}

/// The 2D transform demo's matrix at `seconds`: a half-size quad spinning
/// twice as fast about its own centre as it circles the origin at radius one.
pub fn planar_orbit(seconds: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(0.5))
        * Mat4::from_rotation_z(-seconds)
        * Mat4::from_translation(Vec3::X)
        * Mat4::from_rotation_z(seconds * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn normal_matrix_is_inverse_transpose() {
        let mut transform = Transform::from_position(Vec3::new(1.0, -2.0, 3.0))
            .with_scale(Vec3::new(2.0, 1.0, 0.5));
        transform.rot = Quat::from_axis_angle(Vec3::Y, 0.3);
        transform.refresh();

        let product = transform.normal_matrix.transpose() * transform.matrix;
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn spin_accumulates_and_stays_normalized() {
        let spin = Spin::new(Vec3::new(0.5, 1.0, 0.75), 1.0);
        let mut rot = Quat::IDENTITY;
        for _ in 0..1000 {
            rot = spin.advance(rot, 0.001);
        }

        let expected = Quat::from_axis_angle(spin.axis(), 1.0);
        assert!(rot.abs_diff_eq(expected, 1e-4));
        assert!((rot.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn orbit_rotates_its_offset() {
        let mut orbit = Orbit::new(Vec3::Y, FRAC_PI_2, Vec3::new(2.0, 0.0, 0.0));
        orbit.rotation = orbit.spin.advance(orbit.rotation, 1.0);

        assert!(orbit.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn planar_orbit_starts_on_the_x_axis() {
        let origin = planar_orbit(0.0).transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));

        let half_turn = planar_orbit(PI).transform_point3(Vec3::ZERO);
        assert!(half_turn.abs_diff_eq(Vec3::new(-0.5, 0.0, 0.0), 1e-5));
    }
}
