//! Secrets file path resolution.

use std::path::{Path, PathBuf};

use crate::core::format::SecretsFormat;
use crate::error::{Result, SatchelError};

/// A resolved secrets file: absolute path plus inferred payload format.
///
/// Immutable once resolved. The file's contents are not touched here;
/// decryption happens in a separate step.
#[derive(Debug, Clone)]
pub struct SecretsFile {
    pub path: PathBuf,
    pub format: SecretsFormat,
}

impl SecretsFile {
    /// Resolve a possibly-relative path against the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `SatchelError::NotFound` if the resolved path does not exist.
    pub fn resolve(raw: &str) -> Result<Self> {
        let raw = Path::new(raw);
        let path = if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            std::env::current_dir()?.join(raw)
        };

        if !path.exists() {
            return Err(SatchelError::NotFound(path));
        }

        let format = SecretsFormat::from_path(&path);
        tracing::debug!(path = %path.display(), %format, "resolved secrets file");

        Ok(Self { path, format })
    }
}
