//! Configuration handling.
//!
//! Settings come from `.satchel.toml` in the working directory, falling back
//! to a user-level config under the platform config dir. CLI flags (and
//! their env-var fallbacks) always win over both.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::constants::{CONFIG_FILE, DEFAULT_SECRETS_FILE, DEFAULT_SOPS_BIN, USER_CONFIG_FILE};
use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default encrypted secrets file path.
    #[serde(default)]
    pub file: Option<String>,
    /// Decryption binary to invoke.
    #[serde(default)]
    pub sops: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub struct Settings {
    pub file: String,
    pub sops: String,
}

impl Config {
    pub fn project_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE))
    }

    /// Load the nearest config: project file first, then user file, then
    /// built-in defaults. A present-but-invalid file is an error; a missing
    /// one is not.
    pub fn load() -> Result<Self> {
        let project = Self::project_path();
        if project.exists() {
            tracing::debug!(path = %project.display(), "loading project config");
            return Self::load_from(&project);
        }
        if let Some(user) = Self::user_path() {
            if user.exists() {
                tracing::debug!(path = %user.display(), "loading user config");
                return Self::load_from(&user);
            }
        }
        Ok(Self::default())
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve final settings from CLI flags layered over this config.
    pub fn resolve(file_flag: Option<String>, sops_flag: Option<String>) -> Result<Settings> {
        let config = Self::load()?;
        Ok(Settings {
            file: file_flag
                .or(config.file)
                .unwrap_or_else(|| DEFAULT_SECRETS_FILE.to_string()),
            sops: sops_flag
                .or(config.sops)
                .unwrap_or_else(|| DEFAULT_SOPS_BIN.to_string()),
        })
    }
}
