//! Client configuration loading
//!
//! Loads `~/.config/folio/client.toml` (or the file named by `FOLIO_CONFIG`)
//! and lets `FOLIO_API_URL` override the backend base URL. A missing file is
//! not an error; defaults point at a local backend.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Backend API root; endpoint paths such as `/projects` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("folio-backend-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Environment variable overriding `base_url`
    pub const ENV_API_URL: &'static str = "FOLIO_API_URL";

    /// Environment variable for config path override
    pub const ENV_CONFIG_PATH: &'static str = "FOLIO_CONFIG";

    /// Default config filename
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "client.toml";

    /// Load configuration from file and environment.
    ///
    /// Resolution order:
    /// 1. `FOLIO_CONFIG` environment variable
    /// 2. `~/.config/folio/client.toml`
    ///
    /// `FOLIO_API_URL`, when set, replaces the file's `base_url`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(None, None)
    }

    /// Load configuration, then apply base URL overrides.
    ///
    /// `config_path` replaces the `FOLIO_CONFIG`/default lookup and must exist.
    /// The base URL is taken from, in increasing priority: the file,
    /// `FOLIO_API_URL`, then `api_url`. Validation runs once, on the result.
    pub fn load_with_overrides(
        config_path: Option<&Path>,
        api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let cfg = match config_path {
            Some(path) => Self::read(path)?,
            None => {
                let path = Self::resolve_config_path();
                if path.exists() {
                    Self::read(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "client config not found, using defaults");
                    Self::default()
                }
            }
        };

        cfg.apply_overrides([std::env::var(Self::ENV_API_URL).ok(), api_url])
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let cfg = Self::read(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let cfg: ClientConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace `base_url` when `url` is a non-blank value, then validate.
    pub fn with_base_url_override(self, url: Option<String>) -> Result<Self, ConfigError> {
        self.apply_overrides([url])
    }

    /// Apply base URL overrides in increasing priority, then validate once.
    ///
    /// `None` and blank values are skipped, so an earlier invalid source is
    /// harmless when a later one replaces it.
    pub fn apply_overrides(
        mut self,
        overrides: impl IntoIterator<Item = Option<String>>,
    ) -> Result<Self, ConfigError> {
        for url in overrides.into_iter().flatten() {
            let url = url.trim();
            if !url.is_empty() {
                self.base_url = url.to_string();
            }
        }
        self.validate()?;
        Ok(self)
    }

    // Read and deserialize without validating; callers validate after overrides.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Check that `base_url` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let parsed = url::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }

    /// `base_url` without trailing slashes, ready for `"{base}{endpoint}"`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Resolve the configuration file path
    fn resolve_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(Self::ENV_CONFIG_PATH) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .map(|h| {
                h.join(".config")
                    .join("folio")
                    .join(Self::DEFAULT_CONFIG_FILENAME)
            })
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CONFIG_FILENAME))
    }
}
