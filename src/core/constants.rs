//! Constants used throughout satchel.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name (.satchel.toml).
pub const CONFIG_FILE: &str = ".satchel.toml";

/// User-level configuration file, relative to the platform config dir.
pub const USER_CONFIG_FILE: &str = "satchel/config.toml";

/// Default encrypted secrets file name (.env.enc).
pub const DEFAULT_SECRETS_FILE: &str = ".env.enc";

/// Default decryption binary.
pub const DEFAULT_SOPS_BIN: &str = "sops";
