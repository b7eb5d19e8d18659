//! External decryption tool invocation.
//!
//! The secrets file is never decrypted by satchel itself; sops (or a
//! compatible binary) is invoked with an explicit output format request and
//! its stdout is taken as the plaintext payload.

use std::process::Command;

use zeroize::Zeroizing;

use crate::core::format::SecretsFormat;
use crate::core::source::SecretsFile;
use crate::error::{Result, SatchelError};

/// Decrypted plaintext, in memory only, wiped on drop.
#[derive(Debug)]
pub struct DecryptedPayload {
    pub text: Zeroizing<String>,
    pub format: SecretsFormat,
}

impl DecryptedPayload {
    pub fn new(text: String, format: SecretsFormat) -> Self {
        Self {
            text: Zeroizing::new(text),
            format,
        }
    }
}

/// Decrypt a secrets file by shelling out to the decryption binary.
///
/// Blocks until the tool exits; no timeout is enforced.
///
/// # Errors
///
/// Returns `SatchelError::Decryption` if the binary cannot be started or
/// exits non-zero, carrying the tool's diagnostic output.
pub fn decrypt(source: &SecretsFile, sops_bin: &str) -> Result<DecryptedPayload> {
    tracing::debug!(bin = sops_bin, format = %source.format, "invoking decryption tool");

    let output = Command::new(sops_bin)
        .arg("--decrypt")
        .arg("--output-type")
        .arg(source.format.sops_name())
        .arg(&source.path)
        .output()
        .map_err(|e| SatchelError::Decryption(format!("failed to start {}: {}", sops_bin, e)))?;

    if !output.status.success() {
        return Err(SatchelError::Decryption(diagnostic_text(
            &output.stderr,
            &output.stdout,
            output.status.code(),
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    Ok(DecryptedPayload::new(text, source.format))
}

/// Combine captured stderr/stdout into a failure message.
fn diagnostic_text(stderr: &[u8], stdout: &[u8], code: Option<i32>) -> String {
    let mut parts = Vec::new();
    for stream in [stderr, stdout] {
        let text = String::from_utf8_lossy(stream);
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
    }
    if parts.is_empty() {
        match code {
            Some(code) => format!("decryption tool exited with status {}", code),
            None => "decryption tool terminated by signal".to_string(),
        }
    } else {
        parts.join("\n")
    }
}
