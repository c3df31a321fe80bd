use std::collections::BTreeMap;

use glam::Vec2;

use crate::camera::Controls;

/// Input resource tracking held controls and the mouse motion accumulated
/// since the camera last consumed it.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: Controls,
    mouse_delta: Vec2,
}

impl InputState {
    pub fn held(&self) -> Controls {
        self.held
    }

    pub fn press(&mut self, controls: Controls) {
        self.held.insert(controls);
    }

    pub fn release(&mut self, controls: Controls) {
        self.held.remove(controls);
    }

    /// Updates the held controls from a key event. Returns `false` when the
    /// key is not bound to anything.
    pub fn apply_key(&mut self, bindings: &KeyBindings, key: &str, pressed: bool) -> bool {
        match bindings.control_for(key) {
            Some(control) => {
                if pressed {
                    self.press(control);
                } else {
                    self.release(control);
                }
                true
            }
            None => false,
        }
    }

    pub fn accumulate_mouse(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Returns the accumulated mouse motion and resets it to zero.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::replace(&mut self.mouse_delta, Vec2::ZERO)
    }

    /// Drops all held controls and pending motion, e.g. when focus is lost.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Maps key names, as winit's `VirtualKeyCode` debug-prints them, to the
/// control they hold. Names are matched ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: BTreeMap<String, Controls>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, key: impl Into<String>, control: Controls) {
        let _ = self.keys.insert(key.into().to_ascii_lowercase(), control);
    }

    /// Applies `key = "control"` overrides on top of the current bindings.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> crate::Result<Self> {
        for (key, name) in overrides {
            let control = Controls::single_from_name(name).ok_or_else(|| {
                crate::Error::Config(format!("key '{key}' is bound to unknown control '{name}'"))
            })?;

            // A control has one key; drop whatever held it before.
            self.keys.retain(|_, bound| *bound != control);
            self.bind(key.clone(), control);
        }

        Ok(self)
    }

    pub fn control_for(&self, key: &str) -> Option<Controls> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Controls)> {
        self.keys.iter().map(|(key, control)| (key.as_str(), *control))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind("W", Controls::FORWARD);
        bindings.bind("S", Controls::BACK);
        bindings.bind("A", Controls::LEFT);
        bindings.bind("D", Controls::RIGHT);
        bindings.bind("Space", Controls::UP);
        bindings.bind("LControl", Controls::DOWN);
        bindings.bind("Up", Controls::PITCH_UP);
        bindings.bind("Down", Controls::PITCH_DOWN);
        bindings.bind("Left", Controls::YAW_LEFT);
        bindings.bind("Right", Controls::YAW_RIGHT);
        bindings.bind("Q", Controls::ROLL_LEFT);
        bindings.bind("E", Controls::ROLL_RIGHT);

        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_and_up_toggle_single_bits() {
        let bindings = KeyBindings::default();
        let mut input = InputState::default();

        assert!(input.apply_key(&bindings, "W", true));
        assert!(input.apply_key(&bindings, "D", true));
        assert_eq!(input.held(), Controls::FORWARD | Controls::RIGHT);

        assert!(input.apply_key(&bindings, "W", false));
        assert_eq!(input.held(), Controls::RIGHT);
    }

    #[test]
    fn unbound_keys_are_reported() {
        let mut input = InputState::default();

        assert!(!input.apply_key(&KeyBindings::default(), "F12", true));
        assert!(input.held().is_empty());
    }

    #[test]
    fn mouse_motion_accumulates_until_taken() {
        let mut input = InputState::default();
        input.accumulate_mouse(3.0, -1.0);
        input.accumulate_mouse(2.0, 4.0);

        assert_eq!(input.take_mouse_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn overrides_rebind_a_control() {
        let overrides = BTreeMap::from([("Up".to_owned(), "forward".to_owned())]);
        let bindings = KeyBindings::default().with_overrides(&overrides).unwrap();

        assert_eq!(bindings.control_for("Up"), Some(Controls::FORWARD));
        assert_eq!(bindings.control_for("W"), None);
        assert_eq!(bindings.control_for("Down"), Some(Controls::PITCH_DOWN));
    }

    #[test]
    fn default_bindings_cover_every_control_once() {
        let bindings = KeyBindings::default();
        let all = bindings
            .iter()
            .fold(Controls::empty(), |all, (_, control)| all | control);

        assert_eq!(bindings.iter().count(), 12);
        assert_eq!(all, Controls::MOVEMENT | Controls::ROTATION);
    }

    #[test]
    fn key_names_ignore_case() {
        let overrides = BTreeMap::from([("w".to_owned(), "back".to_owned())]);
        let bindings = KeyBindings::default().with_overrides(&overrides).unwrap();
        let mut input = InputState::default();

        assert!(input.apply_key(&bindings, "W", true));
        assert_eq!(input.held(), Controls::BACK);
        assert_eq!(bindings.control_for("lcontrol"), Some(Controls::DOWN));
    }

    #[test]
    fn overrides_reject_unknown_controls() {
        let overrides = BTreeMap::from([("J".to_owned(), "jump".to_owned())]);

        assert!(matches!(
            KeyBindings::default().with_overrides(&overrides),
            Err(crate::Error::Config(_))
        ));
    }
}
