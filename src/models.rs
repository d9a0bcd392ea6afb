//! Data models and structures
//!
//! Defines the upload kinds, the Cloudinary response payloads, and the
//! environment configuration.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Resource family an asset belongs to; selects the endpoint path segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Image,
    Video,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Video => "video",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(UploadKind::Image),
            "video" => Ok(UploadKind::Video),
            other => Err(format!(
                "Invalid upload kind '{}'. Expected 'image' or 'video'",
                other
            )),
        }
    }
}

/// Successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResult {
    pub public_id: String,
    pub version: u64,
    pub signature: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    pub format: String,
    pub resource_type: String,
    pub created_at: DateTime<Utc>,
    pub bytes: u64,
    pub url: String,
    pub secure_url: String,
}

/// Body of a `destroy` response. `result` is `"ok"` on success.
#[derive(Debug, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
}

/// Envelope wrapping an [`ApiError`] on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub cloudinary_url: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// A missing `.env` is fine; a malformed one is an error.
fn check_dotenv<T>(loaded: Result<T, dotenvy::Error>) -> crate::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        check_dotenv(dotenvy::dotenv())?;

        let timeout_secs = match std::env::var("CLOUDINARY_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                crate::Error::Config(format!(
                    "CLOUDINARY_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            cloudinary_url: std::env::var("CLOUDINARY_URL")
                .map_err(|_| crate::Error::Config("CLOUDINARY_URL not set".to_string()))?,
            base_url: std::env::var("CLOUDINARY_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
