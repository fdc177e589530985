use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a remote resource does when the live asset server cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackMode {
    /// Hand the request to the bundled resource.
    #[default]
    Delegate,
    /// Treat the resource as missing and write nothing.
    NotFound,
}

/// Global configuration loaded from `~/.config/devres/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevresConfig {
    /// Live asset server origin. The `EVERIT_DEV_RESOURCE_PROVIDER_URL` environment variable wins over it.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Behavior on open failure: "delegate" (default) or "not-found".
    #[serde(default)]
    pub fallback_mode: Option<FallbackMode>,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl DevresConfig {
    pub fn fallback_mode(&self) -> FallbackMode {
        self.fallback_mode.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("devres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DevresConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DevresConfig> {
    if !path.exists() {
        let default_cfg = DevresConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: DevresConfig = toml::from_str(&data)?;
    Ok(cfg)
}
