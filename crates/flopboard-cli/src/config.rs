//! Config file + environment + flag resolution.
//!
//! Precedence, highest first: command-line flag, `FLOPBOARD_API_URL`,
//! config file, built-in default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::Cli;

pub const DEFAULT_API_URL: &str = "https://tools.texoit.com/backend-java/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// `<config dir>/flopboard/config.toml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flopboard").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Apply flag and environment overrides on top of the file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match (&cli.config, Self::default_path()) {
            (Some(path), _) => Self::load_from(path)?,
            (None, Some(path)) => Self::load_from(&path)?,
            (None, None) => Self::default(),
        };

        if let Ok(url) = std::env::var("FLOPBOARD_API_URL")
            && !url.is_empty()
        {
            config.api_url = url;
        }
        if let Some(url) = &cli.api_url {
            config.api_url = url.clone();
        }
        if let Some(timeout) = cli.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }
}
