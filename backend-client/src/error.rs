//! Error types for the backend client.
//!
//! `FetchError` never reaches callers of the read/submit operations: it is
//! flattened into a soft-failure [`crate::FetchResult`] at the `safe_fetch`
//! boundary. It exists so the failure classes stay distinct in logs.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single request failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, or read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Machine-readable class for structured logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

/// Configuration could not be loaded or is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A contact form field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("message is {len} characters long; at most {max} are allowed")]
    MessageTooLong { len: usize, max: usize },

    #[error("unknown subject {0:?}; expected one of project, consultation, teaching, job, other")]
    UnknownSubject(String),
}
