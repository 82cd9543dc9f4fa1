//! Run configuration.
//!
//! Settings come from three places, resolved once at startup into a [`Config`]:
//!
//! 1. Environment overrides (`MENU_FEED_URL`, `FEED_URL`, `MENU_OUTPUT_PATH`)
//! 2. Command-line arguments
//! 3. An optional TOML file (`--config`, or `~/.config/menu-feed/config.toml`)
//!
//! Anything still unset falls back to `data/menu.csv` / `data/menu.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Cli;

pub const SOURCE_ENV: &str = "MENU_FEED_URL";
pub const SOURCE_FALLBACK_ENV: &str = "FEED_URL";
pub const OUTPUT_ENV: &str = "MENU_OUTPUT_PATH";

pub const DEFAULT_SOURCE: &str = "data/menu.csv";
pub const DEFAULT_OUTPUT: &str = "data/menu.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of the optional config file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub http: HttpSettings,
    pub paths: PathSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("menu-feed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub source: Option<String>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present and silently skipped otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/menu-feed/config.toml` (platform equivalent)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("menu-feed").join("config.toml"))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw source string, classified later by [`Source::resolve`](crate::domain::Source::resolve)
    pub source: String,
    /// Absolute output path
    pub output: PathBuf,
    pub http: HttpSettings,
}

impl Config {
    /// Merge environment, CLI and file settings.
    ///
    /// `env` looks up a variable by name. Empty values from any layer count
    /// as unset.
    pub fn resolve<F>(cli: &Cli, file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());
        let set_path = |p: &PathBuf| !p.as_os_str().is_empty();

        let source = env(SOURCE_ENV)
            .or_else(|| env(SOURCE_FALLBACK_ENV))
            .or_else(|| cli.source.clone().filter(|s| !s.is_empty()))
            .or(file.paths.source.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let output = env(OUTPUT_ENV)
            .map(PathBuf::from)
            .or_else(|| cli.output.clone().filter(set_path))
            .or(file.paths.output.filter(set_path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let output = std::path::absolute(&output).map_err(|e| ConfigError::Io {
            path: output.clone(),
            source: e,
        })?;

        let mut http = file.http;
        if let Some(secs) = cli.timeout {
            http.timeout_secs = secs;
        }

        Ok(Self {
            source,
            output,
            http,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
