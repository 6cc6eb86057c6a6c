//! Draws a textured wooden table (a slab on four box legs) through a `glow`
//! OpenGL / OpenGL ES context.
//!
//! ```no_run
//! # fn frame(gl: &glow::Context, mvp: &[f32; 16]) -> table_drawer::Result<()> {
//! use table_drawer::{ DrawerConfig, TableDrawer };
//!
//! let table = TableDrawer::with_bundled_texture(gl, &DrawerConfig::default())?;
//! table.draw(gl, mvp);
//! # Ok(())
//! # }
//! ```

pub mod engine;

pub use engine::assets::{ TableMesh, TABLE_INDICES, TABLE_POSITIONS, TEX_COORD_QUAD, TEX_COORD_REPEAT };
pub use engine::components::{ DrawPass, TableDrawer };
pub use engine::config::{ DrawerConfig, MatrixLayout, ShaderDialect, TextureFilter, TextureOptions, TextureWrap };
pub use engine::error::{ DrawerError, Result };
pub use engine::utils::math::Mat4x4;
