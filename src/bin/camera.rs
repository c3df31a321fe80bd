//! Ten cubes spinning at different rates, explored with the free camera.
//!
//! WASD moves, Space/LControl rise and sink, the arrow keys and Q/E pitch,
//! yaw and roll, and the mouse looks around.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::texture::Image,
    scene::mesh::{self, CUBE_POSITIONS},
    world::{Spin, Transform},
};
use glam::Vec3;
use specs::{Builder, Join, World, WorldExt};

struct CameraDemo {
    program: Program,
    cube: GpuMesh,
    texture: Texture2D,
}

impl Demo for CameraDemo {
    fn render(&mut self, world: &World) -> gl_tutorials::Result<()> {
        let (view_proj, _) = app::camera_view(world);

        opengl::clear(Vec3::ZERO);

        self.program.set_mat4("cViewProj", &view_proj)?;
        self.texture.bind(0);

        for transform in (&world.read_storage::<Transform>()).join() {
            self.program.set_mat4("cModel", &transform.matrix)?;
            self.cube.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "Camera",
            camera: CameraMode::Free,
        },
        |world, settings| {
            let program = app::load_program(settings, "cube")?;
            program.set_sampler("sTexture", 0)?;

            let axis = Vec3::new(0.5, 1.0, 0.75);
            for (i, position) in CUBE_POSITIONS.iter().enumerate() {
                world
                    .create_entity()
                    .with(Transform::from_position(*position))
                    .with(Spin::new(axis, 0.1 * (i + 1) as f32))
                    .build();
            }

            Ok(CameraDemo {
                program,
                cube: GpuMesh::upload(&mesh::CUBE)?,
                texture: app::load_texture(settings, "crate.png", || Image::crate_panel(256))?,
            })
        },
    )
}
