//! Error types for record sources.
//!
//! These never reach the search box itself: `sitesearch_core::source::load`
//! logs them and falls back to the built-in list. They exist so the host
//! can report why a load failed and whether retrying could help.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure fetching the record directory.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Data file missing (HTTP 404 or no such local file).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network timeout occurred.
    #[error("Network timeout after {duration:?}")]
    Timeout {
        duration: Duration,
        #[source]
        source: reqwest::Error,
    },

    /// Connection refused (server not reachable).
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    /// Non-success HTTP status other than 404.
    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body was not usable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP client error.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Check if error is transient and potentially retry-able.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused(_) => true,
            Self::ServerError { status, .. } => (500..600).contains(status) || *status == 429,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::NotFound(_) | Self::InvalidResponse(_) | Self::Json(_) | Self::Io { .. } => false,
        }
    }

    /// Check if error indicates the data file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
