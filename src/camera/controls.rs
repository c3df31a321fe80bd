use glam::Vec3;

bitflags::bitflags! {
    /// Discrete actions currently held down.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Controls : u16 {
        const FORWARD = 0x0001;
        const BACK = 0x0002;
        const LEFT = 0x0004;
        const RIGHT = 0x0008;
        const UP = 0x0010;
        const DOWN = 0x0020;
        const PITCH_UP = 0x0040;
        const PITCH_DOWN = 0x0080;
        const YAW_LEFT = 0x0100;
        const YAW_RIGHT = 0x0200;
        const ROLL_LEFT = 0x0400;
        const ROLL_RIGHT = 0x0800;

        const MOVEMENT = Self::FORWARD.bits()
            | Self::BACK.bits()
            | Self::LEFT.bits()
            | Self::RIGHT.bits()
            | Self::UP.bits()
            | Self::DOWN.bits();
        const ROTATION = Self::PITCH_UP.bits()
            | Self::PITCH_DOWN.bits()
            | Self::YAW_LEFT.bits()
            | Self::YAW_RIGHT.bits()
            | Self::ROLL_LEFT.bits()
            | Self::ROLL_RIGHT.bits();
    }
}

/// Key-held rotations in the order they are composed, each with the local
/// axis it turns about.
pub(crate) const ROTATION_AXES: [(Controls, Vec3); 6] = [
    (Controls::PITCH_UP, Vec3::NEG_X),
    (Controls::PITCH_DOWN, Vec3::X),
    (Controls::YAW_LEFT, Vec3::NEG_Y),
    (Controls::YAW_RIGHT, Vec3::Y),
    (Controls::ROLL_LEFT, Vec3::NEG_Z),
    (Controls::ROLL_RIGHT, Vec3::Z),
];

impl Controls {
    /// Looks up a single control by its name, ignoring case
    /// (`"forward"`, `"pitch_up"`, ...).
    pub fn single_from_name(name: &str) -> Option<Self> {
        Self::from_name(&name.to_ascii_uppercase())
            .filter(|control| control.bits().count_ones() == 1)
    }

    /// Unnormalized camera-local movement: forward/back on ∓Z, left/right on
    /// ∓X, up/down on ±Y.
    pub fn movement_vector(self) -> Vec3 {
        let mut vec = Vec3::ZERO;

        if self.contains(Self::FORWARD) {
            vec.z -= 1.0;
        }
        if self.contains(Self::BACK) {
            vec.z += 1.0;
        }
        if self.contains(Self::LEFT) {
            vec.x -= 1.0;
        }
        if self.contains(Self::RIGHT) {
            vec.x += 1.0;
        }
        if self.contains(Self::UP) {
            vec.y += 1.0;
        }
        if self.contains(Self::DOWN) {
            vec.y -= 1.0;
        }

        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_controls_cancel_out() {
        let held = Controls::FORWARD | Controls::BACK | Controls::LEFT;
        assert_eq!(held.movement_vector(), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_bits_do_not_move() {
        assert_eq!(Controls::ROTATION.movement_vector(), Vec3::ZERO);
    }

    #[test]
    fn names_resolve_to_single_bits() {
        assert_eq!(Controls::single_from_name("pitch_up"), Some(Controls::PITCH_UP));
        assert_eq!(Controls::single_from_name("Forward"), Some(Controls::FORWARD));
        assert_eq!(Controls::single_from_name("movement"), None);
        assert_eq!(Controls::single_from_name("jump"), None);
    }
}
