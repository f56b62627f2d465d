//! Application settings and paths.
//!
//! Settings live in `settings.json` under the XDG config directory.

use crate::error::{ConfigError, ConfigResult};
use crate::scanner::DEFAULT_CONCURRENCY;
use crate::sources::DEFAULT_USER_AGENT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/subscout)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve the paths for the current user.
    pub fn resolve() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "subscout", "subscout")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Hosts verified at once.
    pub default_concurrency: usize,
    /// Ping and connect timeout in milliseconds.
    pub default_timeout_ms: u64,
    /// Verification method when none is given.
    pub default_method: String,
    /// Timeout for each passive source request.
    pub source_timeout_secs: u64,
    /// User-Agent sent to passive sources.
    pub user_agent: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_concurrency: DEFAULT_CONCURRENCY,
            default_timeout_ms: 2000,
            default_method: "ping".to_string(),
            source_timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::resolve()?.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_secs)
    }
}
