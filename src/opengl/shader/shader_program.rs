use std::collections::BTreeMap;

use glam::{Mat4, Vec3};

use crate::{
    opengl::{read_info_log, OpenGLObject},
    scene::ShaderSource,
    Error, Result,
};

pub trait ShaderType {
    const SHADER_TYPE: u32;
    const NAME: &'static str;
}

pub enum Vertex {}
impl ShaderType for Vertex {
    const SHADER_TYPE: u32 = gl::VERTEX_SHADER;
    const NAME: &'static str = "vertex";
}

pub enum Fragment {}
impl ShaderType for Fragment {
    const SHADER_TYPE: u32 = gl::FRAGMENT_SHADER;
    const NAME: &'static str = "fragment";
}

/// One compiled shader stage. Only needed until it is linked.
pub struct Shader<T: ShaderType> {
    handle: u32,
    marker: std::marker::PhantomData<T>,
}

impl<T: ShaderType> Shader<T> {
    pub fn compile(source: &str) -> Result<Self> {
        let shader = unsafe {
            let handle = gl::CreateShader(T::SHADER_TYPE);
            let source_ptr = source.as_ptr() as *const gl::types::GLchar;
            let source_len = source.len() as gl::types::GLint;
            gl::ShaderSource(handle, 1, &source_ptr, &source_len);
            gl::CompileShader(handle);

            Self {
                handle,
                marker: std::marker::PhantomData,
            }
        };

        let mut success = 0;
        unsafe { gl::GetShaderiv(shader.handle, gl::COMPILE_STATUS, &mut success) };

        if success == 0 {
            let log =
                unsafe { read_info_log(shader.handle, gl::GetShaderiv, gl::GetShaderInfoLog) };
            return Err(Error::ShaderCompile {
                stage: T::NAME,
                log,
            });
        }

        Ok(shader)
    }
}

impl<T: ShaderType> OpenGLObject for Shader<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: ShaderType> Drop for Shader<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.handle) };
    }
}

/// A linked vertex + fragment program with its active uniforms indexed by
/// name.
pub struct Program {
    handle: u32,
    uniforms: BTreeMap<String, i32>,
}

impl Program {
    pub fn link(vertex: &Shader<Vertex>, fragment: &Shader<Fragment>) -> Result<Self> {
        let handle = unsafe {
            let handle = gl::CreateProgram();
            gl::AttachShader(handle, vertex.handle());
            gl::AttachShader(handle, fragment.handle());
            gl::LinkProgram(handle);
            gl::DetachShader(handle, vertex.handle());
            gl::DetachShader(handle, fragment.handle());
            handle
        };

        let mut program = Self {
            handle,
            uniforms: BTreeMap::new(),
        };

        let mut success = 0;
        unsafe { gl::GetProgramiv(handle, gl::LINK_STATUS, &mut success) };
        if success == 0 {
            let log = unsafe { read_info_log(handle, gl::GetProgramiv, gl::GetProgramInfoLog) };
            return Err(Error::ProgramLink(log));
        }

        program.uniforms = unsafe { Self::query_uniforms(handle) };
        debug!("Identified {} uniforms for current program.", program.uniforms.len());

        Ok(program)
    }

    pub fn from_source(source: &ShaderSource) -> Result<Self> {
        let vertex = Shader::<Vertex>::compile(&source.vertex)?;
        let fragment = Shader::<Fragment>::compile(&source.fragment)?;

        Self::link(&vertex, &fragment)
    }

    unsafe fn query_uniforms(handle: u32) -> BTreeMap<String, i32> {
        let mut uniforms = BTreeMap::new();
        let mut uniform_count = 0;
        let mut max_uniform_len = 0;
        gl::GetProgramiv(handle, gl::ACTIVE_UNIFORMS, &mut uniform_count);
        gl::GetProgramiv(handle, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_uniform_len);

        for index in 0..(uniform_count.max(0) as u32) {
            let mut name_buffer = vec![0u8; max_uniform_len.max(1) as usize];
            let mut name_len = 0;
            let mut size = 0;
            let mut kind = 0;

            gl::GetActiveUniform(
                handle,
                index,
                name_buffer.len() as i32,
                &mut name_len,
                &mut size,
                &mut kind,
                name_buffer.as_mut_ptr() as *mut _,
            );

            // GetUniformLocation wants the NUL-terminated name still in the buffer.
            let location = gl::GetUniformLocation(handle, name_buffer.as_ptr() as *const _);
            name_buffer.truncate(name_len.max(0) as usize);

            // Arrays are reported as "name[0]".
            let name = String::from_utf8_lossy(&name_buffer);
            let name = name.strip_suffix("[0]").unwrap_or(&*name).to_owned();
            let _ = uniforms.insert(name, location);
        }

        uniforms
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.handle) };
    }

    pub fn uniform(&self, name: &str) -> Result<i32> {
        self.uniforms
            .get(name)
            .copied()
            .ok_or_else(|| Error::MissingUniform(name.to_owned()))
    }

    pub fn uniform_names(&self) -> impl Iterator<Item = &str> {
        self.uniforms.keys().map(String::as_str)
    }

    // The setters bind the program first: GL 3.3 has no direct-state uniform
    // upload.

    pub fn set_mat4(&self, name: &str, value: &Mat4) -> Result<()> {
        let location = self.uniform(name)?;
        self.bind();
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ref().as_ptr()) };
        Ok(())
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) -> Result<()> {
        let location = self.uniform(name)?;
        self.bind();
        unsafe { gl::Uniform3f(location, value.x, value.y, value.z) };
        Ok(())
    }

    pub fn set_f32(&self, name: &str, value: f32) -> Result<()> {
        let location = self.uniform(name)?;
        self.bind();
        unsafe { gl::Uniform1f(location, value) };
        Ok(())
    }

    /// Points a sampler uniform at a texture unit.
    pub fn set_sampler(&self, name: &str, unit: u32) -> Result<()> {
        let location = self.uniform(name)?;
        self.bind();
        unsafe { gl::Uniform1i(location, unit as i32) };
        Ok(())
    }
}

impl OpenGLObject for Program {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.handle) };
    }
}
