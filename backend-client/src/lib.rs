//! Resilient client for the portfolio content backend.
//!
//! Every call returns a [`FetchResult`] instead of an error: network
//! failures, non-2xx statuses and malformed bodies are logged and reported
//! as `success: false`. Successful payloads are unwrapped from the
//! backend's `data`/`results`/`items` envelopes and normalized with
//! `folio_content`.
//!
//! [`ContentLoader`] layers caller-supplied fallback content on top, so a
//! page can always render something.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod client;
pub mod config;
pub mod contact;
pub mod envelope;
pub mod error;
pub mod loader;
pub mod query;

pub use client::{FetchOptions, PortfolioClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use contact::{ContactForm, ContactSubject, MAX_MESSAGE_CHARS};
pub use envelope::{FetchResult, ResponseEnvelope};
pub use error::{ConfigError, ContactError, FetchError};
pub use loader::{ContentLoader, DataSource, Loaded, SiteContent, resolve_with_fallback};
pub use query::{BlogQuery, ProjectQuery};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
