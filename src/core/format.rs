//! Secrets file format inference.
//!
//! The payload format is inferred from the file extension and passed to the
//! decryption tool as an explicit output format request.

use std::fmt;
use std::path::Path;

/// Flat key/value format of a decrypted secrets payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsFormat {
    Dotenv,
    Yaml,
    Json,
}

impl SecretsFormat {
    /// Infer the format from a file extension.
    ///
    /// `.json` maps to JSON, `.yaml`/`.yml` to YAML, and anything else
    /// (including `.env`, `.enc` and extensionless paths) to dotenv.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Dotenv,
        }
    }

    /// Format name as understood by `sops --output-type`.
    pub fn sops_name(&self) -> &'static str {
        match self {
            Self::Dotenv => "dotenv",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for SecretsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sops_name())
    }
}
