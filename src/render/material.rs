use glam::Vec3;

use crate::{opengl::shader::Program, Result};

/// Surface parameters for the Phong shaders. The diffuse and specular maps
/// are bound to texture units [`Material::DIFFUSE_UNIT`] and
/// [`Material::SPECULAR_UNIT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub shininess: f32,
}

impl Material {
    pub const DIFFUSE_UNIT: u32 = 0;
    pub const SPECULAR_UNIT: u32 = 1;

    /// Uploads `cMaterial`. The maps themselves are bound by the caller.
    pub fn apply(&self, program: &Program) -> Result<()> {
        program.set_sampler("cMaterial.sDiffuse", Self::DIFFUSE_UNIT)?;
        program.set_sampler("cMaterial.sSpecular", Self::SPECULAR_UNIT)?;
        program.set_f32("cMaterial.shininess", self.shininess)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self { shininess: 32.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl PointLight {
    pub fn apply(&self, program: &Program) -> Result<()> {
        program.set_vec3("cLight.position", self.position)?;
        program.set_vec3("cLight.diffuse", self.diffuse)?;
        program.set_vec3("cLight.specular", self.specular)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            diffuse: Vec3::new(1.0, 0.8, 0.6),
            specular: Vec3::splat(0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels in; need not be normalized.
    pub direction: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl DirectionalLight {
    pub fn apply(&self, program: &Program) -> Result<()> {
        program.set_vec3("cLight.direction", self.direction)?;
        program.set_vec3("cLight.diffuse", self.diffuse)?;
        program.set_vec3("cLight.specular", self.specular)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            diffuse: Vec3::new(1.0, 0.8, 0.6),
            specular: Vec3::splat(0.5),
        }
    }
}

/// Light-independent scene terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub ambient: Vec3,
    pub clear_color: Vec3,
}

impl Environment {
    /// Uploads the ambient term and the viewer position used for specular
    /// highlights.
    pub fn apply(&self, program: &Program, view_pos: Vec3) -> Result<()> {
        program.set_vec3("cAmbientColor", self.ambient)?;
        program.set_vec3("cViewPos", view_pos)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            clear_color: Vec3::ZERO,
        }
    }
}

/// The small unlit cube drawn at a point light's position, tinted with the
/// light's diffuse colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lamp {
    pub scale: f32,
}

impl Lamp {
    pub fn emissive_color(&self, light: &PointLight) -> Vec3 {
        light.diffuse
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self { scale: 0.25 }
    }
}
