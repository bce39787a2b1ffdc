//! Error types for the tech blog core

use thiserror::Error;

/// Errors raised while loading or validating site configuration.
///
/// Rendering itself never fails; these only surface at startup.
#[derive(Error, Debug)]
pub enum BlogError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but a value is unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using BlogError
pub type BlogResult<T> = Result<T, BlogError>;
