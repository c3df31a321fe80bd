//! Two triangles splitting a square, each with its own vertex array and its
//! own solid-colour program.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh},
    scene::mesh,
};
use glam::Vec3;
use specs::World;

struct TwoTriangles {
    halves: [(Program, GpuMesh); 2],
}

impl Demo for TwoTriangles {
    fn render(&mut self, _world: &World) -> gl_tutorials::Result<()> {
        opengl::clear(Vec3::ZERO);

        for (program, triangle) in &self.halves {
            program.bind();
            triangle.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "First Triangle (two programs)",
            camera: CameraMode::Fixed,
        },
        |_world, settings| {
            let lower = (
                app::load_program(settings, "triangle_blue")?,
                GpuMesh::upload(&mesh::TRIANGLE)?,
            );
            let upper = (
                app::load_program(settings, "triangle_yellow")?,
                GpuMesh::upload(&mesh::UPPER_TRIANGLE)?,
            );

            Ok(TwoTriangles {
                halves: [lower, upper],
            })
        },
    )
}
