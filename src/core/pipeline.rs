//! End-to-end secrets pipeline.
//!
//! resolve → decrypt → parse → apply → run command → revert. The revert is
//! tied to the overlay guard's drop and executes on every path out of the
//! pipeline, including a failed command launch or a panic in between.

use std::path::PathBuf;
use std::process::Command;

use crate::core::decrypt;
use crate::core::format::SecretsFormat;
use crate::core::overlay::EnvOverlay;
use crate::core::parse;
use crate::core::source::SecretsFile;
use crate::error::{Result, SatchelError};

/// Outcome of a child command invocation.
///
/// A command that cannot be started is reported here with exit code 1 and an
/// error message, never surfaced as a pipeline error; a failing command is
/// the user's failure, not satchel's.
#[derive(Debug)]
pub struct CommandResult {
    pub exit_code: i32,
    pub success: bool,
    pub error: Option<String>,
}

/// What one pipeline run did: where the secrets came from, what was loaded
/// (names only, never values) and how the child command fared.
#[derive(Debug)]
pub struct PipelineReport {
    pub success: bool,
    pub exit_code: i32,
    pub secrets_path: PathBuf,
    pub format: SecretsFormat,
    pub secrets_loaded: usize,
    pub keys: Vec<String>,
    pub command_line: String,
    pub launch_error: Option<String>,
}

/// Run the full pipeline for one command invocation.
///
/// # Errors
///
/// Returns `SatchelError::NoCommand` for an empty argv,
/// `SatchelError::NotFound` when the secrets file is missing and
/// `SatchelError::Decryption` when the external tool fails. Both fatal
/// errors abort before any environment mutation. A child command that fails
/// or cannot be launched is reported in the result instead.
pub fn run(file: &str, sops_bin: &str, command: &[String]) -> Result<PipelineReport> {
    if command.is_empty() {
        return Err(SatchelError::NoCommand);
    }

    let source = SecretsFile::resolve(file)?;
    let payload = decrypt::decrypt(&source, sops_bin)?;
    let map = parse::parse(&payload);
    drop(payload);

    if map.is_empty() {
        tracing::warn!(path = %source.path.display(), "no secrets parsed from payload");
    }

    let overlay = EnvOverlay::apply(&map);
    let keys = overlay.keys().to_vec();

    tracing::debug!(command = %command.join(" "), "launching command");
    let result = run_command(command);

    // Revert before surfacing the result; the guard also fires if
    // run_command panics.
    drop(overlay);

    Ok(PipelineReport {
        success: result.success,
        exit_code: result.exit_code,
        secrets_path: source.path,
        format: source.format,
        secrets_loaded: keys.len(),
        keys,
        command_line: command.join(" "),
        launch_error: result.error,
    })
}

/// Launch a command with the current (overlaid) environment and inherited
/// stdio, blocking until it exits.
pub fn run_command(command: &[String]) -> CommandResult {
    match Command::new(&command[0]).args(&command[1..]).status() {
        Ok(status) => {
            // No exit code means death by signal; report a generic failure.
            let exit_code = status.code().unwrap_or(1);
            CommandResult {
                exit_code,
                success: exit_code == 0,
                error: None,
            }
        }
        Err(e) => CommandResult {
            exit_code: 1,
            success: false,
            error: Some(format!("failed to start {}: {}", command[0], e)),
        },
    }
}
