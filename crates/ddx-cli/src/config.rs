//! TOML configuration for the `ddx` binary.
//!
//! Every key is optional; a missing file section falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Guideline matches rendered when the config does not say otherwise.
pub const DEFAULT_GUIDELINE_LIMIT: usize = 3;

const DEFAULT_ADVISORY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {message}")]
    Invalid { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub report: ReportSettings,
    pub advisory: AdvisorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Number of guideline matches shown in table and text output.
    pub guideline_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            guideline_limit: DEFAULT_GUIDELINE_LIMIT,
        }
    }
}

/// Settings for the experimental classifier advisory.
///
/// Disabled unless both `enabled` is set and an endpoint is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorySettings {
    pub enabled: bool,
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer token.
    pub token_env: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AdvisorySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            token_env: None,
            timeout_secs: DEFAULT_ADVISORY_TIMEOUT_SECS,
        }
    }
}

impl AdvisorySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured endpoint, if the advisory is switched on.
    pub fn active_endpoint(&self) -> Option<&str> {
        if self.enabled {
            self.endpoint.as_deref()
        } else {
            None
        }
    }

    /// Read the bearer token from the configured environment variable.
    pub fn token(&self) -> Option<String> {
        self.token_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.guideline_limit == 0 {
            return Err(ConfigError::Invalid {
                message: "report.guideline_limit must be at least 1".to_string(),
            });
        }
        if self.advisory.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "advisory.timeout_secs must be at least 1".to_string(),
            });
        }
        if self.advisory.enabled && self.advisory.endpoint.is_none() {
            return Err(ConfigError::Invalid {
                message: "advisory.enabled requires advisory.endpoint".to_string(),
            });
        }
        if let Some(endpoint) = &self.advisory.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::Invalid {
                message: format!("advisory.endpoint must be an http(s) URL, got {endpoint}"),
            });
        }
        Ok(())
    }
}
