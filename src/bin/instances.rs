//! The same cube drawn at ten positions, all turning together.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::texture::Image,
    scene::mesh::{self, CUBE_POSITIONS},
    world::{Spin, Transform},
};
use glam::Vec3;
use specs::{Builder, Join, World, WorldExt};

struct Instances {
    program: Program,
    cube: GpuMesh,
    texture: Texture2D,
}

impl Demo for Instances {
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
            title: "Instances",
            camera: CameraMode::Fixed,
        },
        |world, settings| {
            let program = app::load_program(settings, "cube")?;
            program.set_sampler("sTexture", 0)?;

            for position in CUBE_POSITIONS {
                world
                    .create_entity()
                    .with(Transform::from_position(position))
                    .with(Spin::new(Vec3::new(0.5, 1.0, 0.75), 1.0))
                    .build();
            }

            Ok(Instances {
                program,
                cube: GpuMesh::upload(&mesh::CUBE)?,
                texture: app::load_texture(settings, "crate.png", || {
                    Image::checkerboard(256, 8, [230, 200, 150], [90, 60, 30])
                })?,
            })
        },
    )
}
