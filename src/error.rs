//! Error handling and custom error types
//!
//! Provides unified error handling across the client using thiserror.

use serde::Deserialize;
use thiserror::Error;

/// Error reported by the Cloudinary API itself.
///
/// Decoded from the `{"error": {"message": ...}}` envelope, or built from a
/// non-`ok` destroy result. Displays as the bare message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),
}

impl Error {
    /// Returns the remote message when this is an API error.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(&e.message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
