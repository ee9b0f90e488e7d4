//! Client configuration.
//!
//! The only thing the client needs to know is where the events API lives.
//! It is resolved once at startup and handed to `HttpEventApi::new`:
//! command-line flag, then `MEETUPS_API_BASE_URL`, then the config file at
//! ~/.config/meetups/config.toml, then the local development default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MeetupsError, MeetupsResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

/// Environment variable that selects the API base URL.
pub const API_BASE_URL_ENV: &str = "MEETUPS_API_BASE_URL";

/// Optional settings file at ~/.config/meetups/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Per-request timeout; unset leaves it to the HTTP transport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn config_path() -> MeetupsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetupsError::Config("Could not determine config directory".into()))?
            .join("meetups");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, or defaults when it doesn't exist.
    pub fn load() -> MeetupsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> MeetupsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            MeetupsError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| MeetupsError::Config(format!("Invalid {}: {e}", path.display())))
    }
}

/// Resolved settings injected into the API client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Validate and normalize a base URL (trailing slashes are dropped).
    pub fn new(base_url: &str) -> MeetupsResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| MeetupsError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MeetupsError::Config(format!(
                "API base URL must be http or https, got '{base_url}'"
            )));
        }

        Ok(ClientConfig {
            base_url: trimmed.to_string(),
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pick the base URL by precedence: flag, environment, file, default.
    /// Empty values count as unset.
    pub fn resolve(
        flag: Option<&str>,
        env: Option<&str>,
        file: &ConfigFile,
    ) -> MeetupsResult<Self> {
        let base_url = [flag, env, file.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Ok(Self::new(base_url)?.with_timeout(file.timeout_secs.map(Duration::from_secs)))
    }

    /// Resolve against the real environment and config file.
    pub fn from_environment(flag: Option<&str>) -> MeetupsResult<Self> {
        let file = ConfigFile::load()?;
        let env = std::env::var(API_BASE_URL_ENV).ok();
        Self::resolve(flag, env.as_deref(), &file)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL for an API path such as "/events".
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
