//! Ten crates under a single directional light.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::{texture::Image, DirectionalLight, Environment, Material},
    scene::mesh::{self, CUBE_POSITIONS},
    world::{Spin, Transform},
};
use glam::Vec3;
use specs::{Builder, Join, World, WorldExt};

struct LightEnv {
    lit: Program,
    cube: GpuMesh,
    diffuse: Texture2D,
    specular: Texture2D,
    light: DirectionalLight,
    environment: Environment,
}

impl Demo for LightEnv {
    fn render(&mut self, world: &World) -> gl_tutorials::Result<()> {
        let (view_proj, eye) = app::camera_view(world);

        opengl::clear(self.environment.clear_color);

        self.lit.set_mat4("cViewProj", &view_proj)?;
        self.environment.apply(&self.lit, eye)?;
        self.light.apply(&self.lit)?;

        self.diffuse.bind(Material::DIFFUSE_UNIT);
        self.specular.bind(Material::SPECULAR_UNIT);

        for transform in (&world.read_storage::<Transform>()).join() {
            self.lit.set_mat4("cModel", &transform.matrix)?;
            self.lit.set_mat4("cModelInv", &transform.normal_matrix)?;
            self.cube.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "Light Environment",
            camera: CameraMode::Free,
        },
        |world, settings| {
            let lit = app::load_program(settings, "phong_directional")?;
            Material::default().apply(&lit)?;

            for position in CUBE_POSITIONS {
                world
                    .create_entity()
                    .with(Transform::from_position(position))
                    .with(Spin::new(Vec3::new(0.5, 0.5, 0.2), -0.025))
                    .build();
            }

            Ok(LightEnv {
                lit,
                cube: GpuMesh::upload(&mesh::LIT_CUBE)?,
                diffuse: app::load_texture(settings, "crate_diffuse.png", || {
                    Image::crate_panel(256)
                })?,
                specular: app::load_texture(settings, "crate_specular.png", || {
                    Image::crate_specular(256)
                })?,
                light: DirectionalLight::default(),
                environment: Environment::default(),
            })
        },
    )
}
