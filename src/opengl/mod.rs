//! Thin RAII wrappers over the OpenGL 3.3 core objects the demos use.
//!
//! Everything here assumes a current context on the calling thread; the
//! wrappers release their GL names on drop.

mod error;
mod mesh;
mod texture;
mod vertex_array_object;

pub mod buffer;
pub mod shader;

pub use error::*;
pub use mesh::*;
pub use texture::*;
pub use vertex_array_object::*;

pub trait OpenGLObject {
    fn handle(&self) -> u32;
}

/// Reads a shader or program info log through the matching GL getters.
pub(crate) unsafe fn read_info_log(
    handle: u32,
    get_iv: unsafe fn(u32, gl::types::GLenum, *mut gl::types::GLint),
    get_log: unsafe fn(u32, gl::types::GLsizei, *mut gl::types::GLsizei, *mut gl::types::GLchar),
) -> String {
    let mut log_len = 0;
    get_iv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

    if log_len <= 0 {
        return String::new();
    }

    let mut log = vec![0u8; log_len as usize];
    let mut written = 0;
    get_log(handle, log_len, &mut written, log.as_mut_ptr() as *mut _);
    log.truncate(written.max(0) as usize);

    String::from_utf8_lossy(&log).trim_end().to_owned()
}

/// Clears the colour and depth buffers of the current framebuffer.
pub fn clear(color: glam::Vec3) {
    unsafe {
        gl::ClearColor(color.x, color.y, color.z, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}
