use thiserror::Error;

/// Everything that can go wrong while setting up the table drawer.
///
/// Drawing itself has no failure path; all of these surface from construction
/// or configuration loading and are meant to be treated as start-up faults.
#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("failed to create GL {object}: {reason}")]
    GlObject { object: &'static str, reason: String },

    #[error("{stage} shader compile error: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("shader program link error: {0}")]
    ProgramLink(String),

    #[error("shader program has no active attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("shader program has no active uniform `{0}`")]
    MissingUniform(&'static str),

    #[error("failed to decode texture image")]
    TextureDecode(#[from] image::ImageError),

    #[error("texture is {width}x{height}, which GL cannot address")]
    TextureSize { width: u32, height: u32 },

    #[error("invalid drawer config")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrawerError>;

impl DrawerError {
    pub(crate) fn gl_object(object: &'static str, reason: String) -> Self {
        DrawerError::GlObject { object, reason }
    }
}
