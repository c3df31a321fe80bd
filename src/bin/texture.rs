//! A quad sampling a procedurally generated checkerboard.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::texture::Image,
    scene::mesh,
};
use glam::Vec3;
use specs::World;

struct Textured {
    program: Program,
    quad: GpuMesh,
    texture: Texture2D,
}

impl Demo for Textured {
    fn render(&mut self, _world: &World) -> gl_tutorials::Result<()> {
        opengl::clear(Vec3::ZERO);

        self.texture.bind(0);
        self.program.bind();
        self.quad.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "Texture",
            camera: CameraMode::Fixed,
        },
        |_world, settings| {
            let program = app::load_program(settings, "texture")?;
            program.set_sampler("sTexture", 0)?;

            Ok(Textured {
                program,
                quad: GpuMesh::upload(&mesh::QUAD)?,
                texture: app::load_texture(settings, "crate.png", || {
                    Image::checkerboard(256, 8, [230, 200, 150], [90, 60, 30])
                })?,
            })
        },
    )
}
