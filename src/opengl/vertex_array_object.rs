use super::{buffer::Buffer, OpenGLObject};
use crate::scene::mesh::VertexLayout;

pub struct VertexArrayObject {
    handle: u32,
}

impl VertexArrayObject {
    pub fn new() -> Self {
        let mut handle = 0;
        unsafe { gl::GenVertexArrays(1, &mut handle) };

        Self { handle }
    }

    /// Records `layout` over `vertices` (and the element buffer, if any) into
    /// this vertex array. Leaves the vertex array bound.
    pub fn commit(
        &self,
        vertices: &Buffer<f32>,
        indices: Option<&Buffer<u32>>,
        layout: &VertexLayout,
    ) {
        self.bind();
        vertices.bind();

        let stride = layout.stride() as i32;
        for (attribute, offset) in layout.attributes() {
            unsafe {
                gl::VertexAttribPointer(
                    attribute.location,
                    attribute.components as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    stride,
                    offset as *const _,
                );
                gl::EnableVertexAttribArray(attribute.location);
            }
        }

        // The element binding is part of vertex array state.
        if let Some(indices) = indices {
            indices.bind();
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.handle) };
    }
}

impl Default for VertexArrayObject {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenGLObject for VertexArrayObject {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.handle) };
    }
}
