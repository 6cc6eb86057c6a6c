//! The table drawer: owns the table's GPU resources and replays the same
//! draw sequence every frame.

use glow::HasContext;
use log::{ info, warn };

use crate::engine::assets::{ TableMesh, TABLE_FRAGMENT_SHADER, TABLE_VERTEX_SHADER, WOOD_TEXTURE_PNG };
use crate::engine::components::{ Material, MeshBuffers };
use crate::engine::config::{ DrawerConfig, MatrixLayout };
use crate::engine::error::Result;
use crate::engine::managers::{ decode_texture, upload_texture, ShaderProgram };
use crate::engine::utils::math::{ mat4x4_to_column_major, Mat4x4 };

/// What a single `draw` submits, minus the GL handles.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPass {
    /// MVP in column-major order, ready for `uniform_matrix_4_f32_slice`.
    pub mvp: Mat4x4,
    pub index_count: i32,
    pub texture_unit: u32,
}

impl DrawPass {
    pub fn new(mesh: &TableMesh, mvp: &Mat4x4, layout: MatrixLayout, texture_unit: u32) -> Self {
        Self {
            mvp: mat4x4_to_column_major(mvp, layout),
            index_count: mesh.index_count() as i32,
            texture_unit,
        }
    }
}

pub struct TableDrawer {
    mesh: TableMesh,
    shader: ShaderProgram,
    buffers: MeshBuffers,
    material: Material,
    matrix_layout: MatrixLayout,
}

impl TableDrawer {
    /// Compiles the shader pair, uploads the mesh and uploads `texture_bytes`
    /// (an encoded PNG) as the table's texture.
    ///
    /// Everything happens synchronously on the calling thread, which must
    /// own `gl`. Resources created before a failing step are released again.
    pub fn new(gl: &glow::Context, texture_bytes: &[u8], config: &DrawerConfig) -> Result<Self> {
        let texture_unit = checked_texture_unit(gl, config.texture_unit);
        let mesh = TableMesh::new();

        let shader = ShaderProgram::new(
            gl,
            TABLE_VERTEX_SHADER,
            TABLE_FRAGMENT_SHADER,
            config.shader_dialect
        )?;

        let buffers = match MeshBuffers::upload(gl, &mesh) {
            Ok(buffers) => buffers,
            Err(e) => {
                shader.destroy(gl);
                return Err(e);
            }
        };

        let texture = match decode_texture(texture_bytes)
            .and_then(|image| upload_texture(gl, &image, &config.texture))
        {
            Ok(texture) => texture,
            Err(e) => {
                buffers.destroy(gl);
                shader.destroy(gl);
                return Err(e);
            }
        };

        info!(
            "✅ Table drawer ready: {} triangles, texture unit {}",
            mesh.triangle_count(),
            texture_unit
        );

        Ok(Self {
            mesh,
            shader,
            buffers,
            material: Material::new(texture, texture_unit),
            matrix_layout: config.matrix_layout,
        })
    }

    /// Same as [`TableDrawer::new`] with the wood texture shipped in the crate.
    pub fn with_bundled_texture(gl: &glow::Context, config: &DrawerConfig) -> Result<Self> {
        Self::new(gl, WOOD_TEXTURE_PNG, config)
    }

    pub fn mesh(&self) -> &TableMesh {
        &self.mesh
    }

    pub fn frame(&self, mvp: &Mat4x4) -> DrawPass {
        DrawPass::new(&self.mesh, mvp, self.matrix_layout, self.material.texture_unit)
    }

    /// Draws the whole table into the current framebuffer with `mvp`.
    ///
    /// Leaves the program bound; attribute arrays and buffer bindings are
    /// reset. In a core profile the host must have a vertex array bound.
    pub fn draw(&self, gl: &glow::Context, mvp: &Mat4x4) {
        let pass = self.frame(mvp);
        let position = self.shader.position_location;
        let tex_coord = self.shader.tex_coord_location;

        self.shader.use_program(gl);
        self.material.bind(gl);

        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(&self.shader.mvp_location), false, &pass.mvp);
            gl.uniform_1_i32(Some(&self.shader.texture_location), pass.texture_unit as i32);

            gl.enable_vertex_attrib_array(position);
            gl.enable_vertex_attrib_array(tex_coord);

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffers.position_buffer));
            gl.vertex_attrib_pointer_f32(position, 3, glow::FLOAT, false, 3 * 4, 0);

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffers.tex_coord_buffer));
            gl.vertex_attrib_pointer_f32(tex_coord, 2, glow::FLOAT, false, 2 * 4, 0);

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.buffers.index_buffer));
            gl.draw_elements(glow::TRIANGLES, pass.index_count, glow::UNSIGNED_SHORT, 0);

            gl.disable_vertex_attrib_array(position);
            gl.disable_vertex_attrib_array(tex_coord);

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    /// Releases the program, buffers and texture. Must run on the thread and
    /// context that created them.
    pub fn destroy(self, gl: &glow::Context) {
        self.material.destroy(gl);
        self.buffers.destroy(gl);
        self.shader.destroy(gl);
    }
}

fn checked_texture_unit(gl: &glow::Context, requested: u32) -> u32 {
    let available = unsafe { gl.get_parameter_i32(glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS) };
    resolve_texture_unit(requested, available)
}

fn resolve_texture_unit(requested: u32, available: i32) -> u32 {
    if available <= 0 || i64::from(requested) < i64::from(available) {
        return requested;
    }
    warn!(
        "Texture unit {} exceeds the {} units this context provides, using unit 0",
        requested,
        available
    );
    0
}
