pub mod table_mesh;

pub use table_mesh::*;

/// Wood texture bundled with the crate, drawn on every face of the table.
pub const WOOD_TEXTURE_PNG: &[u8] = include_bytes!("../../assets/textures/wood_texture.png");

pub const TABLE_VERTEX_SHADER: &str = include_str!("../../assets/shaders/table_vertex.glsl");
pub const TABLE_FRAGMENT_SHADER: &str = include_str!("../../assets/shaders/table_fragment.glsl");
