//! Runtime configuration.
//!
//! Layered, later wins: defaults, `config.json` in the user config dir,
//! `COVIDASH_*` environment variables, then command-line flags.
//!
//! ```ignore
//! let config = DashConfig::load()?
//!     .with_timeline_days(30)
//!     .with_api_base_url("http://localhost:3000");
//! config.validate()?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::error::ConfigError;

pub const ENV_API_URL: &str = "COVIDASH_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "COVIDASH_TIMEOUT_SECS";
pub const ENV_TIMELINE_DAYS: &str = "COVIDASH_TIMELINE_DAYS";
pub const ENV_LOG: &str = "COVIDASH_LOG";

pub const MAX_TIMELINE_DAYS: u32 = 1500;

const APP_DIR: &str = "covidash";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Base URL of the statistics API (default: https://disease.sh)
    pub api_base_url: String,
    /// Per-request timeout (default: 15)
    pub request_timeout_secs: u64,
    /// Days of history for the graph (default: 120)
    pub timeline_days: u32,
    /// UI tick interval (default: 100)
    pub tick_rate_ms: u64,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log file, defaults to the user data dir
    pub log_file: Option<PathBuf>,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
            timeline_days: 120,
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl DashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_timeline_days(mut self, days: u32) -> Self {
        self.timeline_days = days;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// `~/.config/covidash/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Defaults, overlaid with the config file (if any) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `COVIDASH_*` variables. Unset or empty variables are ignored.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = env_var(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = env_var(ENV_TIMELINE_DAYS) {
            self.timeline_days = parse_number(ENV_TIMELINE_DAYS, &raw)?;
        }
        if let Some(level) = env_var(ENV_LOG) {
            self.log_level = level;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://"))
            || url.trim_start_matches("https://").trim_start_matches("http://").is_empty()
        {
            return Err(invalid("api_base_url", format!("'{}' is not an http(s) URL", url)));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "must be greater than 0"));
        }
        if !(1..=MAX_TIMELINE_DAYS).contains(&self.timeline_days) {
            return Err(invalid(
                "timeline_days",
                format!("must be between 1 and {}", MAX_TIMELINE_DAYS),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(invalid("tick_rate_ms", "must be greater than 0"));
        }
        Ok(())
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| invalid(key, format!("'{}' is not a valid number", raw)))
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}
