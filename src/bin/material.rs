//! A crate lit by a point light that orbits it. The light is drawn as a small
//! unlit cube in its own colour.

use gl_tutorials::{
    app::{self, CameraMode, Demo, DemoConfig},
    opengl::{self, shader::Program, GpuMesh, Texture2D},
    render::{texture::Image, Environment, Lamp, Material, PointLight},
    scene::mesh,
    world::{Orbit, Spin, Transform},
};
use glam::Vec3;
use specs::{Builder, Entity, World, WorldExt};

const LIGHT_OFFSET: Vec3 = Vec3::new(2.0, 1.0, -0.5);

struct MaterialDemo {
    lit: Program,
    emissive: Program,
    cube: GpuMesh,
    diffuse: Texture2D,
    specular: Texture2D,
    light: PointLight,
    lamp: Lamp,
    environment: Environment,
    crate_entity: Entity,
    lamp_entity: Entity,
}

impl Demo for MaterialDemo {
    fn render(&mut self, world: &World) -> gl_tutorials::Result<()> {
        let (view_proj, eye) = app::camera_view(world);
        let transforms = world.read_storage::<Transform>();

        if let Some(lamp) = transforms.get(self.lamp_entity) {
            self.light.position = lamp.pos;
        }

        opengl::clear(self.environment.clear_color);

        if let Some(transform) = transforms.get(self.crate_entity) {
            self.lit.set_mat4("cViewProj", &view_proj)?;
            self.lit.set_mat4("cModel", &transform.matrix)?;
            self.lit.set_mat4("cModelInv", &transform.normal_matrix)?;
            self.environment.apply(&self.lit, eye)?;
            self.light.apply(&self.lit)?;

            self.diffuse.bind(Material::DIFFUSE_UNIT);
            self.specular.bind(Material::SPECULAR_UNIT);
            self.cube.draw();
        }

        if let Some(transform) = transforms.get(self.lamp_entity) {
            self.emissive.set_mat4("cViewProj", &view_proj)?;
            self.emissive.set_mat4("cModel", &transform.matrix)?;
            self.emissive
                .set_vec3("cColor", self.lamp.emissive_color(&self.light))?;
            self.cube.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    app::run(
        DemoConfig {
            title: "Material",
            camera: CameraMode::Free,
        },
        |world, settings| {
            let lit = app::load_program(settings, "phong_point")?;
            let emissive = app::load_program(settings, "emissive")?;

            Material::default().apply(&lit)?;

            let lamp = Lamp::default();

            let crate_entity = world
                .create_entity()
                .with(Transform::default())
                .with(Spin::new(Vec3::new(0.5, 0.5, 0.2), -0.25))
                .build();

            let lamp_entity = world
                .create_entity()
                .with(Transform::from_position(LIGHT_OFFSET).with_scale(Vec3::splat(lamp.scale)))
                .with(Orbit::new(Vec3::new(0.0, 0.8, 0.2), 1.0, LIGHT_OFFSET))
                .build();

            Ok(MaterialDemo {
                lit,
                emissive,
                cube: GpuMesh::upload(&mesh::LIT_CUBE)?,
                diffuse: app::load_texture(settings, "crate_diffuse.png", || {
                    Image::crate_panel(256)
                })?,
                specular: app::load_texture(settings, "crate_specular.png", || {
                    Image::crate_specular(256)
                })?,
                light: PointLight {
                    position: LIGHT_OFFSET,
                    ..PointLight::default()
                },
                lamp,
                environment: Environment::default(),
                crate_entity,
                lamp_entity,
            })
        },
    )
}
