use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay between failed attempts, in seconds (e.g. 0.25 = 250ms).
    pub wait_interval_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            wait_interval_secs: 1.0,
        }
    }
}

impl RetryConfig {
    /// Convert to a validated [`RetryPolicy`].
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        if !self.wait_interval_secs.is_finite() || self.wait_interval_secs < 0.0 {
            anyhow::bail!(
                "wait_interval_secs must be a non-negative number (got {})",
                self.wait_interval_secs
            );
        }
        let wait = Duration::from_secs_f64(self.wait_interval_secs);
        Ok(RetryPolicy::new(self.max_attempts, wait)?)
    }
}

/// Global configuration loaded from `~/.config/refetch/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefetchConfig {
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("refetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// Loaded once at startup; never reloaded or mutated at runtime.
pub fn load_or_init() -> Result<RefetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RefetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RefetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
