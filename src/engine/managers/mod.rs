pub mod shader_manager;
pub mod texture_manager;

pub use shader_manager::{ prepare_shader_source, ShaderProgram };
pub use texture_manager::{ decode_texture, upload_texture, TextureImage };
