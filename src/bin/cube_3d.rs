//! One textured cube tumbling in front of a fixed camera.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::texture::Image,
    scene::mesh,
    world::{Spin, Transform},
};
use glam::Vec3;
use specs::{Builder, Entity, World, WorldExt};

struct Cube3d {
    program: Program,
    cube: GpuMesh,
    texture: Texture2D,
    entity: Entity,
}

impl Demo for Cube3d {
    fn render(&mut self, world: &World) -> gl_tutorials::Result<()> {
        let (view_proj, _) = app::camera_view(world);

        opengl::clear(Vec3::ZERO);

        if let Some(transform) = world.read_storage::<Transform>().get(self.entity) {
            self.program.set_mat4("cViewProj", &view_proj)?;
            self.program.set_mat4("cModel", &transform.matrix)?;
            self.texture.bind(0);
            self.cube.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "3D Cube",
            camera: CameraMode::Fixed,
        },
        |world, settings| {
            let program = app::load_program(settings, "cube")?;
            program.set_sampler("sTexture", 0)?;

            let entity = world
                .create_entity()
                .with(Transform::from_position(Vec3::new(0.0, 0.0, -2.0)))
                .with(Spin::new(Vec3::new(0.5, 1.0, 0.75), 1.0))
                .build();

            Ok(Cube3d {
                program,
                cube: GpuMesh::upload(&mesh::CUBE)?,
                texture: app::load_texture(settings, "crate.png", || Image::crate_panel(256))?,
                entity,
            })
        },
    )
}
