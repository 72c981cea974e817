//! Playground configuration.
//!
//! Loaded from `~/.notify-playground/config.toml`. Defaults apply when the
//! file is missing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The notification API the dashboard talks to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://0bookback.vercel.app/api/notify";

/// Playground configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Base URL; each action's path is appended to it.
    pub base_url: String,

    /// Recipient used when `--email` is not given.
    pub default_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_email: None,
        }
    }
}

impl Config {
    /// Load config from `~/.notify-playground/config.toml`.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.base_url.trim().is_empty() {
            return Err(format!("base-url is empty in {}", path.display()));
        }

        Ok(config)
    }

    /// The config file path: `~/.notify-playground/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".notify-playground").join("config.toml"))
    }
}
