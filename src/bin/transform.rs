//! The textured quad circling the origin while spinning about its centre.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::texture::Image,
    scene::mesh,
    time::Uptime,
    world::planar_orbit,
};
use glam::Vec3;
use specs::{World, WorldExt};

struct Transformed {
    program: Program,
    quad: GpuMesh,
    texture: Texture2D,
}

impl Demo for Transformed {
    fn render(&mut self, world: &World) -> gl_tutorials::Result<()> {
        let seconds = world.read_resource::<Uptime>().seconds();

        opengl::clear(Vec3::ZERO);

        self.program.set_mat4("cTransform", &planar_orbit(seconds))?;
        self.texture.bind(0);
        self.quad.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "Transform",
            camera: CameraMode::Fixed,
        },
        |_world, settings| {
            let program = app::load_program(settings, "transform")?;
            program.set_sampler("sTexture", 0)?;

            Ok(Transformed {
                program,
                quad: GpuMesh::upload(&mesh::QUAD)?,
                texture: app::load_texture(settings, "crate_diffuse.png", || {
                    Image::checkerboard(256, 8, [230, 200, 150], [90, 60, 30])
                })?,
            })
        },
    )
}
