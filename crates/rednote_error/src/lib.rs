//! Error types for the Rednote copy generator.
//!
//! This crate provides the foundation error types used throughout the
//! Rednote workspace.

mod config;
mod deepseek;
mod http;
mod json;

pub use config::ConfigError;
pub use deepseek::{DeepSeekError, DeepSeekErrorKind};
pub use http::HttpError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum RednoteErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// DeepSeek provider error
    DeepSeek(DeepSeekError),
}

impl std::fmt::Display for RednoteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RednoteErrorKind::Http(e) => write!(f, "{}", e),
            RednoteErrorKind::Json(e) => write!(f, "{}", e),
            RednoteErrorKind::Config(e) => write!(f, "{}", e),
            RednoteErrorKind::DeepSeek(e) => write!(f, "{}", e),
        }
    }
}

/// Rednote error with kind discrimination.
#[derive(Debug)]
pub struct RednoteError(Box<RednoteErrorKind>);

impl RednoteError {
    /// Create a new error from a kind.
    pub fn new(kind: RednoteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RednoteErrorKind {
        &self.0
    }
}

impl std::fmt::Display for RednoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rednote Error: {}", self.0)
    }
}

impl std::error::Error for RednoteError {}

// Generic From implementation for any type that converts to RednoteErrorKind
impl<T> From<T> for RednoteError
where
    T: Into<RednoteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Rednote operations.
pub type RednoteResult<T> = std::result::Result<T, RednoteError>;
