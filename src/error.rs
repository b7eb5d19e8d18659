use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatchelError {
    #[error("secrets file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("no command specified")]
    NoCommand,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SatchelError>;
