//! Run command.
//!
//! Executes a command with decrypted secrets injected as environment
//! variables, then exits with the child's exit code.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::pipeline;
use crate::error::Result;

/// Run a command with secrets injected as environment variables.
pub fn execute(file: Option<String>, sops: Option<String>, command: &[String]) -> Result<()> {
    let settings = Config::resolve(file, sops)?;

    // An interrupt is delivered to the whole foreground process group. Keep
    // this process alive through it so the overlay is still reverted once
    // the child dies.
    let _ = ctrlc::set_handler(|| {});

    let report = pipeline::run(&settings.file, &settings.sops, command)?;

    if report.secrets_loaded == 0 {
        output::warn(&format!(
            "no secrets loaded from {}",
            report.secrets_path.display()
        ));
    }
    if let Some(err) = &report.launch_error {
        output::error(err);
    }

    tracing::debug!(
        command = %report.command_line,
        code = report.exit_code,
        secrets = report.secrets_loaded,
        "command finished"
    );

    // Mirror the child's exit code; the overlay is already reverted by the
    // time the pipeline returns.
    if report.exit_code != 0 {
        std::process::exit(report.exit_code);
    }

    Ok(())
}
