use specs::Join;

use super::FreeCamera;
use crate::{input::InputState, time::DeltaTime};

/// Integrates every [`FreeCamera`] from this frame's input, then consumes the
/// accumulated mouse motion.
pub struct FreeCameraSystem;

impl<'a> specs::System<'a> for FreeCameraSystem {
    type SystemData = (
        specs::ReadExpect<'a, DeltaTime>,
        specs::Write<'a, InputState>,
        specs::WriteStorage<'a, FreeCamera>,
    );

    fn run(&mut self, (delta, mut input, mut cameras): Self::SystemData) {
        let mouse_delta = input.take_mouse_delta();
        let held = input.held();

        for camera in (&mut cameras).join() {
            camera.integrate(held, mouse_delta, delta.seconds());
        }
    }
}
