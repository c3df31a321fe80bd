use super::{
    buffer::{Buffer, BufferDraw, BufferTarget},
    check_errors, VertexArrayObject,
};
use crate::{scene::mesh::MeshData, Result};

/// A [`MeshData`] uploaded to the GPU.
pub struct GpuMesh {
    vao: VertexArrayObject,
    // Kept alive for as long as the vertex array references them.
    _vertices: Buffer<f32>,
    indices: Option<Buffer<u32>>,
    draw_count: i32,
}

impl GpuMesh {
    pub fn upload(mesh: &MeshData) -> Result<Self> {
        let vertices = Buffer::new_data(BufferTarget::Array, mesh.vertices, BufferDraw::Static);
        let indices = mesh
            .indices
            .map(|indices| Buffer::new_data(BufferTarget::Element, indices, BufferDraw::Static));

        // Elements when indexed, otherwise whole vertices.
        let draw_count = match &indices {
            Some(indices) => indices.data_len(),
            None => vertices.data_len() / mesh.layout.floats_per_vertex(),
        };

        let vao = VertexArrayObject::new();
        vao.commit(&vertices, indices.as_ref(), &mesh.layout);

        unsafe { gl::BindVertexArray(0) };
        check_errors()?;

        debug!("Uploaded mesh: {} vertices, {} elements.", mesh.vertex_count(), draw_count);

        Ok(Self {
            vao,
            _vertices: vertices,
            indices,
            draw_count: draw_count as i32,
        })
    }

    pub fn draw(&self) {
        self.vao.bind();

        unsafe {
            if self.indices.is_some() {
                let indices = std::ptr::null();
                gl::DrawElements(gl::TRIANGLES, self.draw_count, gl::UNSIGNED_INT, indices);
            } else {
                gl::DrawArrays(gl::TRIANGLES, 0, self.draw_count);
            }
        }
    }
}
