use glow::HasContext;
use log::debug;

use crate::engine::assets::TableMesh;
use crate::engine::error::{ DrawerError, Result };

/// GPU copies of the table mesh: one buffer per attribute stream plus the
/// index buffer, all uploaded once as `STATIC_DRAW`.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    pub position_buffer: glow::Buffer,
    pub tex_coord_buffer: glow::Buffer,
    pub index_buffer: glow::Buffer,
    pub index_count: usize,
    pub vertex_count: usize,
}

impl MeshBuffers {
    pub fn upload(gl: &glow::Context, mesh: &TableMesh) -> Result<Self> {
        let tex_coords = mesh.vertex_tex_coords();

        unsafe {
            let position_buffer = upload_buffer(
                gl,
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(mesh.positions()),
                &[]
            )?;
            let tex_coord_buffer = upload_buffer(
                gl,
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&tex_coords),
                &[position_buffer]
            )?;
            let index_buffer = upload_buffer(
                gl,
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(mesh.indices()),
                &[position_buffer, tex_coord_buffer]
            )?;

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            debug!(
                "Uploaded table mesh: {} vertices, {} indices",
                mesh.vertex_count(),
                mesh.index_count()
            );

            Ok(Self {
                position_buffer,
                tex_coord_buffer,
                index_buffer,
                index_count: mesh.index_count(),
                vertex_count: mesh.vertex_count(),
            })
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.position_buffer);
            gl.delete_buffer(self.tex_coord_buffer);
            gl.delete_buffer(self.index_buffer);
        }
    }
}

/// Creates and fills one buffer. On failure the already created buffers in
/// `created` are released so construction does not leak.
unsafe fn upload_buffer(
    gl: &glow::Context,
    target: u32,
    data: &[u8],
    created: &[glow::Buffer]
) -> Result<glow::Buffer> {
    match gl.create_buffer() {
        Ok(buffer) => {
            gl.bind_buffer(target, Some(buffer));
            gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
            Ok(buffer)
        }
        Err(e) => {
            for &buffer in created {
                gl.delete_buffer(buffer);
            }
            Err(DrawerError::gl_object("buffer", e))
        }
    }
}
