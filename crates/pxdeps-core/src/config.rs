use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/pxdeps/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PxdepsConfig {
    /// Directory resources are placed under. Defaults to `~/.local/share/pxdeps`.
    #[serde(default)]
    pub data_root: Option<PathBuf>,
    /// Seconds allowed for the TCP/TLS connect of a fetch.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole fetch, body included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fetch again even when the destination file already exists.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    3600
}

impl Default for PxdepsConfig {
    fn default() -> Self {
        Self {
            data_root: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            overwrite: false,
        }
    }
}

impl PxdepsConfig {
    /// Configured data root, or the XDG default.
    pub fn resolved_data_root(&self) -> Result<PathBuf> {
        match &self.data_root {
            Some(root) => Ok(root.clone()),
            None => default_data_root(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pxdeps")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `$XDG_DATA_HOME/pxdeps`.
pub fn default_data_root() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pxdeps")?;
    Ok(xdg_dirs.get_data_home())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PxdepsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PxdepsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<PxdepsConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PxdepsConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
