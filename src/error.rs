//! Error types for configuration, menu I/O and the viewer process

use thiserror::Error;

/// Result type for bhgrav operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised around the numerical core
///
/// The integrators themselves never fail; non-finite samples are passed through.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Viewer error: {0}")]
    Viewer(String),
}

impl SimError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
