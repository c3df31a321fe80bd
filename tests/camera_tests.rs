use glam::{Quat, Vec2, Vec3};
use gl_tutorials::camera::{integrate, CameraConfig, Controls, FreeCamera};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(test)]
mod integrator_tests {
    use super::*;

    #[test]
    fn test_orientation_stays_unit_after_random_updates() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let config = CameraConfig::default();
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        for _ in 0..10_000 {
            let held = Controls::from_bits_truncate(rng.random::<u16>());
            let mouse = Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
            let dt = rng.random_range(0.0..0.05);

            integrate(&mut orientation, &mut position, held, mouse, dt, &config);
        }

        assert!(
            (orientation.length() - 1.0).abs() < 1e-5,
            "Orientation drifted to length {}",
            orientation.length()
        );
        assert!(position.is_finite());
    }

    #[test]
    fn test_idle_updates_are_idempotent() {
        let config = CameraConfig::default();
        let start = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), 0.7);

        let (mut once_rot, mut once_pos) = (start, Vec3::new(1.0, 2.0, 3.0));
        integrate(&mut once_rot, &mut once_pos, Controls::empty(), Vec2::ZERO, 0.016, &config);

        let (mut twice_rot, mut twice_pos) = (start, Vec3::new(1.0, 2.0, 3.0));
        for _ in 0..2 {
            integrate(
                &mut twice_rot,
                &mut twice_pos,
                Controls::empty(),
                Vec2::ZERO,
                0.016,
                &config,
            );
        }

        assert_eq!(once_rot, twice_rot);
        assert_eq!(once_pos, twice_pos);
        assert_eq!(once_rot, start);
    }

    #[test]
    fn test_quarter_mouse_yaw_turns_forward_to_negative_x() {
        let config = CameraConfig {
            mouse_sensitivity: 1.0,
            ..CameraConfig::default()
        };
        let mut camera = FreeCamera::new(Vec3::ZERO, config);

        camera.integrate(
            Controls::empty(),
            Vec2::new(std::f32::consts::FRAC_PI_2, 0.0),
            1.0,
        );

        assert!(
            camera.forward().abs_diff_eq(Vec3::NEG_X, 1e-5),
            "Forward should be -X, got {:?}",
            camera.forward()
        );
    }

    #[test]
    fn test_walking_a_square_returns_home() {
        let config = CameraConfig {
            move_speed: 1.0,
            ..CameraConfig::default()
        };
        let mut camera = FreeCamera::new(Vec3::ZERO, config);

        for held in [Controls::FORWARD, Controls::RIGHT, Controls::BACK, Controls::LEFT] {
            camera.integrate(held, Vec2::ZERO, 0.5);
        }

        assert!(camera.position.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert_eq!(camera.orientation, Quat::IDENTITY);
    }
}
