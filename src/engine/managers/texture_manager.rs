use glow::HasContext;
use log::info;

use crate::engine::config::TextureOptions;
use crate::engine::error::{ DrawerError, Result };

/// Decoded image, tightly packed RGBA8 rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    fn gl_size(&self) -> Result<(i32, i32)> {
        match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(DrawerError::TextureSize { width: self.width, height: self.height }),
        }
    }
}

pub fn decode_texture(bytes: &[u8]) -> Result<TextureImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Creates a 2D texture from `image` and leaves `TEXTURE_2D` unbound.
pub fn upload_texture(
    gl: &glow::Context,
    image: &TextureImage,
    options: &TextureOptions
) -> Result<glow::Texture> {
    let (width, height) = image.gl_size()?;

    unsafe {
        let texture = gl.create_texture().map_err(|e| DrawerError::gl_object("texture", e))?;
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));

        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, options.min_filter.gl_enum() as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, options.mag_filter.gl_enum() as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, options.wrap.gl_enum() as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, options.wrap.gl_enum() as i32);

        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            width,
            height,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(&image.pixels))
        );

        gl.bind_texture(glow::TEXTURE_2D, None);

        info!("✅ Texture loaded: {}x{} pixels", image.width, image.height);
        Ok(texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::WOOD_TEXTURE_PNG;

    #[test]
    fn bundled_wood_texture_decodes_to_rgba() {
        let image = decode_texture(WOOD_TEXTURE_PNG).unwrap();
        assert!(image.width > 0 && image.height > 0);
        assert_eq!(image.pixels.len(), (image.width * image.height * 4) as usize);
        // fully opaque, since the source has no alpha channel
        assert!(image.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_texture(b"definitely not a png").unwrap_err();
        assert!(matches!(err, DrawerError::TextureDecode(_)));
    }

    #[test]
    fn zero_sized_images_are_rejected_before_upload() {
        let image = TextureImage { width: 0, height: 4, pixels: Vec::new() };
        assert!(matches!(image.gl_size(), Err(DrawerError::TextureSize { .. })));
    }

    #[test]
    fn oversized_images_are_rejected_before_upload() {
        let image = TextureImage { width: u32::MAX, height: 1, pixels: Vec::new() };
        assert!(matches!(image.gl_size(), Err(DrawerError::TextureSize { .. })));
    }
}
