use serde::{ Deserialize, Serialize };

use crate::engine::error::Result;

/// GLSL flavour the bundled shaders are compiled as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderDialect {
    /// OpenGL ES 2.0 / WebGL 1.
    #[default]
    Gles100,
    /// Desktop OpenGL 2.1 or a compatibility profile.
    Glsl120,
}

impl ShaderDialect {
    /// Text substituted for the `#VERSION` line of the bundled shaders.
    pub fn header(self) -> &'static str {
        match self {
            ShaderDialect::Gles100 => "#version 100\nprecision mediump float;",
            ShaderDialect::Glsl120 => "#version 120",
        }
    }
}

/// Memory order of the 16 floats the caller hands to `draw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    #[default]
    ColumnMajor,
    RowMajor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureFilter {
    #[default]
    Linear,
    Nearest,
}

impl TextureFilter {
    pub fn gl_enum(self) -> u32 {
        match self {
            TextureFilter::Linear => glow::LINEAR,
            TextureFilter::Nearest => glow::NEAREST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureWrap {
    #[default]
    Repeat,
    ClampToEdge,
}

impl TextureWrap {
    pub fn gl_enum(self) -> u32 {
        match self {
            TextureWrap::Repeat => glow::REPEAT,
            TextureWrap::ClampToEdge => glow::CLAMP_TO_EDGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureOptions {
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub wrap: TextureWrap,
}

/// Settings for [`TableDrawer`](crate::TableDrawer). Every field has a
/// default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub shader_dialect: ShaderDialect,
    pub matrix_layout: MatrixLayout,
    pub texture: TextureOptions,
    pub texture_unit: u32,
}

impl DrawerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = DrawerConfig::from_json("{}").unwrap();
        assert_eq!(config, DrawerConfig::default());
        assert_eq!(config.shader_dialect, ShaderDialect::Gles100);
        assert_eq!(config.matrix_layout, MatrixLayout::ColumnMajor);
        assert_eq!(config.texture.min_filter, TextureFilter::Linear);
        assert_eq!(config.texture.mag_filter, TextureFilter::Linear);
        assert_eq!(config.texture_unit, 0);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = DrawerConfig::from_json(
            r#"{ "shader_dialect": "glsl120", "texture": { "mag_filter": "nearest" } }"#
        ).unwrap();
        assert_eq!(config.shader_dialect, ShaderDialect::Glsl120);
        assert_eq!(config.texture.mag_filter, TextureFilter::Nearest);
        assert_eq!(config.texture.min_filter, TextureFilter::Linear);
        assert_eq!(config.texture.wrap, TextureWrap::Repeat);
        assert_eq!(config.matrix_layout, MatrixLayout::ColumnMajor);
    }

    #[test]
    fn unknown_dialect_is_a_config_error() {
        let err = DrawerConfig::from_json(r#"{ "shader_dialect": "hlsl" }"#).unwrap_err();
        assert!(matches!(err, crate::DrawerError::Config(_)));
    }

    #[test]
    fn config_survives_json() {
        let config = DrawerConfig {
            matrix_layout: MatrixLayout::RowMajor,
            texture_unit: 3,
            ..DrawerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(DrawerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn gles_header_declares_float_precision() {
        assert!(ShaderDialect::Gles100.header().starts_with("#version 100"));
        assert!(ShaderDialect::Gles100.header().contains("precision mediump float;"));
        assert_eq!(ShaderDialect::Glsl120.header(), "#version 120");
    }
}
