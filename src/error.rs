//! Crate-level error type.

use std::{fmt, path::PathBuf};

use crate::opengl::GlError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while setting up or running a tutorial scene.
#[derive(Debug)]
pub enum Error {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Settings file could not be parsed or holds invalid values.
    Config(String),
    /// A shader source file was missing or empty.
    ShaderSource { path: PathBuf, reason: String },
    /// The driver rejected a shader stage.
    ShaderCompile { stage: &'static str, log: String },
    /// The driver failed to link a program.
    ProgramLink(String),
    /// A uniform the scene relies on is not active in the program.
    MissingUniform(String),
    /// `glGetError` reported a failure.
    Gl(GlError),
    /// Invalid texture dimensions or pixel data.
    Texture(String),
    /// Window or GL context creation failed.
    Window(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::ShaderSource { path, reason } => {
                write!(f, "shader source {}: {reason}", path.display())
            }
            Self::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {log}")
            }
            Self::ProgramLink(log) => write!(f, "program failed to link: {log}"),
            Self::MissingUniform(name) => {
                write!(f, "could not find uniform {name} in shader")
            }
            Self::Gl(e) => write!(f, "OpenGL error: {e}"),
            Self::Texture(msg) => write!(f, "texture error: {msg}"),
            Self::Window(msg) => write!(f, "window error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Gl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GlError> for Error {
    fn from(e: GlError) -> Self {
        Self::Gl(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_uniform() {
        let err = Error::MissingUniform("cViewProj".to_owned());
        assert_eq!(err.to_string(), "could not find uniform cViewProj in shader");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }
}
