use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/webenum/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebenumConfig {
    /// Seconds allowed for the TCP/TLS connect phase (0 = libcurl default).
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole HEAD request (0 = no limit).
    pub request_timeout_secs: u64,
}

impl Default for WebenumConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webenum")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The config only tunes timeouts, so a config dir that cannot be resolved or
/// written falls back to defaults. Only a file that exists but does not parse
/// is an error.
pub fn load_or_init() -> Result<WebenumConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("cannot locate config dir, using defaults: {:#}", e);
            Ok(WebenumConfig::default())
        }
    }
}

/// Like [`load_or_init`] but with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WebenumConfig> {
    if !path.exists() {
        let default_cfg = WebenumConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!("using default config: {:#}", e),
        }
        return Ok(default_cfg);
    }

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("cannot read {}, using defaults: {}", path.display(), e);
            return Ok(WebenumConfig::default());
        }
    };
    let cfg: WebenumConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &WebenumConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
