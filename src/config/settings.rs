use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::source::DEFAULT_API_URL;
use crate::source::sample::DEFAULT_SAMPLE_MONTHS;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
    pub sample: SampleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// Per-request timeout; unset means wait indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub seed: Option<u64>,
    pub months: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output".to_string(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            months: DEFAULT_SAMPLE_MONTHS,
        }
    }
}

impl Config {
    /// Load the config at `path`, or the default location when `path` is None.
    /// A missing file yields defaults; nothing is ever written back.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            if path.is_some() {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home.join(".config").join("task-analyzer").join("config.toml"))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
