//! A single flat-coloured triangle.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh},
    scene::mesh,
};
use glam::Vec3;
use specs::World;

struct FirstTriangle {
    program: Program,
    triangle: GpuMesh,
}

impl Demo for FirstTriangle {
    fn render(&mut self, _world: &World) -> gl_tutorials::Result<()> {
        opengl::clear(Vec3::ZERO);

        self.program.bind();
        self.triangle.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "First Triangle",
            camera: CameraMode::Fixed,
        },
        |_world, settings| {
            Ok(FirstTriangle {
                program: app::load_program(settings, "triangle")?,
                triangle: GpuMesh::upload(&mesh::TRIANGLE)?,
            })
        },
    )
}
