use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::controls::{Controls, ROTATION_AXES};

/// Per-camera tuning. Sensitivities are in radians per second (per pixel for
/// the mouse); negative values make positive input turn clockwise, which is
/// what makes a rightward mouse motion look right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub mouse_sensitivity: f32,
    pub rotation_sensitivity: f32,
    pub move_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: -0.25,
            rotation_sensitivity: -1.25,
            move_speed: 5.0,
        }
    }
}

/// Advances a free camera by one frame.
///
/// New rotations are left-multiplied (`orientation = delta * orientation`),
/// so every turn happens about a world axis: mouse yaw about +Y then mouse
/// pitch about +X, followed by any held rotation controls in
/// [`ROTATION_AXES`] order. Held movement is normalized before scaling so
/// diagonal motion is as fast as axial motion.
///
/// A non-positive or non-finite `delta_seconds` leaves both outputs untouched.
pub fn integrate(
    orientation: &mut Quat,
    position: &mut Vec3,
    held: Controls,
    mouse_delta: Vec2,
    delta_seconds: f32,
    config: &CameraConfig,
) {
    if delta_seconds <= 0.0 || !delta_seconds.is_finite() {
        return;
    }

    let mut rotated = false;

    let look_angle = delta_seconds * config.mouse_sensitivity;
    if mouse_delta.x != 0.0 {
        *orientation = Quat::from_axis_angle(Vec3::Y, mouse_delta.x * look_angle) * *orientation;
        rotated = true;
    }
    if mouse_delta.y != 0.0 {
        *orientation = Quat::from_axis_angle(Vec3::X, mouse_delta.y * look_angle) * *orientation;
        rotated = true;
    }

    let key_angle = delta_seconds * config.rotation_sensitivity;
    for (control, axis) in ROTATION_AXES {
        if held.contains(control) {
            *orientation = Quat::from_axis_angle(axis, key_angle) * *orientation;
            rotated = true;
        }
    }

    if rotated {
        *orientation = orientation.normalize();
    }

    let local_move = held.movement_vector();
    if local_move != Vec3::ZERO {
        let world_move = *orientation * local_move.normalize();
        *position += world_move * (config.move_speed * delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn unit_config() -> CameraConfig {
        CameraConfig {
            mouse_sensitivity: 1.0,
            rotation_sensitivity: 1.0,
            move_speed: 1.0,
        }
    }

    #[test]
    fn idle_frame_changes_nothing() {
        let mut orientation = Quat::from_axis_angle(Vec3::new(0.6, 0.0, 0.8), 0.7);
        let mut position = Vec3::new(1.0, 2.0, 3.0);
        let (before_q, before_p) = (orientation, position);

        integrate(
            &mut orientation,
            &mut position,
            Controls::empty(),
            Vec2::ZERO,
            0.016,
            &CameraConfig::default(),
        );

        assert_eq!(orientation, before_q);
        assert_eq!(position, before_p);
    }

    #[test]
    fn zero_delta_time_is_a_no_op() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        for dt in [0.0, -1.0, f32::NAN] {
            integrate(
                &mut orientation,
                &mut position,
                Controls::FORWARD | Controls::YAW_LEFT,
                Vec2::new(5.0, -3.0),
                dt,
                &unit_config(),
            );
        }

        assert_eq!(orientation, Quat::IDENTITY);
        assert_eq!(position, Vec3::ZERO);
    }

    #[test]
    fn forward_for_one_second_moves_one_unit_down_negative_z() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::FORWARD,
            Vec2::ZERO,
            1.0,
            &unit_config(),
        );

        assert_eq!(position, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn diagonal_movement_is_not_faster() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::FORWARD | Controls::RIGHT,
            Vec2::ZERO,
            1.0,
            &unit_config(),
        );

        assert!((position.length() - 1.0).abs() < 1e-6);
        assert!(position.x > 0.0 && position.z < 0.0);
    }

    #[test]
    fn quarter_turn_mouse_yaw_faces_negative_x() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::empty(),
            Vec2::new(FRAC_PI_2, 0.0),
            1.0,
            &unit_config(),
        );

        let forward = orientation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_X, 1e-6), "{forward:?}");
    }

    #[test]
    fn default_sensitivity_turns_right_for_rightward_mouse() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::empty(),
            Vec2::new(10.0, 0.0),
            0.1,
            &CameraConfig::default(),
        );

        assert!((orientation * Vec3::NEG_Z).x > 0.0);
    }

    #[test]
    fn mouse_pitch_is_applied_about_world_x_after_yaw() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::empty(),
            Vec2::new(FRAC_PI_2, FRAC_PI_2),
            1.0,
            &unit_config(),
        );

        let expected = Quat::from_axis_angle(Vec3::X, FRAC_PI_2)
            * Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert!(orientation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn held_rotations_compose_in_fixed_order() {
        let mut orientation = Quat::IDENTITY;
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::PITCH_DOWN | Controls::YAW_RIGHT | Controls::ROLL_RIGHT,
            Vec2::ZERO,
            0.5,
            &unit_config(),
        );

        let expected = Quat::from_axis_angle(Vec3::Z, 0.5)
            * Quat::from_axis_angle(Vec3::Y, 0.5)
            * Quat::from_axis_angle(Vec3::X, 0.5);
        assert!(orientation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn movement_follows_orientation() {
        let mut orientation = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let mut position = Vec3::ZERO;

        integrate(
            &mut orientation,
            &mut position,
            Controls::FORWARD,
            Vec2::ZERO,
            2.0,
            &CameraConfig {
                move_speed: 3.0,
                ..unit_config()
            },
        );

        assert!(position.abs_diff_eq(Vec3::new(-6.0, 0.0, 0.0), 1e-5));
    }
}
