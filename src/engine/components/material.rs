use glow::HasContext;

/// The table's single texture and the sampler unit it is bound to.
#[derive(Debug, Clone)]
pub struct Material {
    pub texture: glow::Texture,
    pub texture_unit: u32,
}

impl Material {
    pub fn new(texture: glow::Texture, texture_unit: u32) -> Self {
        Self { texture, texture_unit }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + self.texture_unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_texture(self.texture);
        }
    }
}
