use std::mem;

use thiserror::Error;

/// Error produced when text cannot be read as a version.
///
/// There is a single kind of failure. Two errors are equal when they are the
/// same kind, whichever input triggered them, so callers can match against a
/// reference value without knowing the offending string.
#[derive(Error, Debug, Clone)]
pub enum VersionError {
    #[error("invalid version {0:?}")]
    InvalidVersion(String),
}

impl VersionError {
    /// Create an invalid-version error for the given raw input
    pub fn invalid(input: impl Into<String>) -> Self {
        VersionError::InvalidVersion(input.into())
    }

    /// The raw input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            VersionError::InvalidVersion(input) => input,
        }
    }
}

impl PartialEq for VersionError {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl Eq for VersionError {}

/// Unified error type for dotver operations
#[derive(Error, Debug)]
pub enum DotverError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag pattern error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in dotver
pub type Result<T> = std::result::Result<T, DotverError>;

impl DotverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DotverError::Config(msg.into())
    }

    /// Create a tag pattern error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        DotverError::Tag(msg.into())
    }
}
