//! Check command.
//!
//! Preflight checks: is the decryption tool on PATH, does the secrets file
//! exist, and what format will be requested for it.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::format::SecretsFormat;
use crate::error::Result;

/// Run preflight checks. Exits non-zero if any check fails.
pub fn execute(file: Option<String>, sops: Option<String>) -> Result<()> {
    let settings = Config::resolve(file, sops)?;
    let mut ok = true;

    output::progress(&format!("decryption tool ({})", settings.sops));
    match which::which(&settings.sops) {
        Ok(path) => {
            output::progress_done(true);
            output::kv("found", path.display());
        }
        Err(_) => {
            output::progress_done(false);
            ok = false;
        }
    }

    output::progress(&format!("secrets file ({})", settings.file));
    let path = Path::new(&settings.file);
    if path.exists() {
        output::progress_done(true);
        output::kv("format", SecretsFormat::from_path(path));
    } else {
        output::progress_done(false);
        ok = false;
    }

    if !ok {
        output::hint("set the file with --file or .satchel.toml");
        std::process::exit(1);
    }

    Ok(())
}
