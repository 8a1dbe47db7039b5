//! Error types for drawing commands and configuration files

use thiserror::Error;

/// Result alias used by every drawing command
pub type Result<T> = std::result::Result<T, DrawError>;

/// Categorical drawing failure.
///
/// Every variant is raised before the surface is touched, so a command that
/// returns an error has written no pixels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Geometry argument was not a finite integer
    #[error("{op}: argument `{name}` must be an integer, got {value}")]
    InvalidCoordinates {
        op: &'static str,
        name: &'static str,
        value: String,
    },

    /// Color input could not be parsed
    #[error("{op}: invalid color {input}")]
    InvalidColor { op: &'static str, input: String },

    /// Palette index outside `[0, len)`
    #[error("{op}: palette index {index} out of range (palette has {len} colors)")]
    ColorOutOfRange {
        op: &'static str,
        index: i64,
        len: usize,
    },

    /// Any other contract violation (negative radius, zero pen size, ...)
    #[error("{op}: {message}")]
    InvalidParameter { op: &'static str, message: String },
}

impl DrawError {
    pub fn invalid_parameter(op: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            op,
            message: message.into(),
        }
    }

    /// Re-tag a color error with the command that triggered it
    pub(crate) fn with_op(self, op: &'static str) -> Self {
        match self {
            Self::InvalidColor { input, .. } => Self::InvalidColor { op, input },
            Self::ColorOutOfRange { index, len, .. } => Self::ColorOutOfRange { op, index, len },
            other => other,
        }
    }
}

/// Failure loading or saving a surface configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config is invalid: {0}")]
    Draw(#[from] DrawError),
}
