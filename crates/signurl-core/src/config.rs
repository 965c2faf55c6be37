use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::credential::Credential;

/// Environment variable holding the bearer credential. Takes precedence over
/// `api_key` in the config file.
pub const API_KEY_ENV: &str = "SIGNURL_API_KEY";

/// Per-probe timeouts (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Seconds allowed for the TCP/TLS connect.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole HEAD request.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/signurl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignurlConfig {
    /// Comma-separated custom domains; these are trusted and receive the credential.
    #[serde(default)]
    pub whitelisted_domains: Option<String>,
    /// Bearer credential used when `SIGNURL_API_KEY` is unset.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl SignurlConfig {
    /// Credential from the environment, falling back to the config file.
    pub fn credential(&self) -> Credential {
        self.credential_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn credential_with_env(&self, env_value: Option<String>) -> Credential {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .map(Credential::new)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("signurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SignurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SignurlConfig> {
    if !path.exists() {
        let default_cfg = SignurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SignurlConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
