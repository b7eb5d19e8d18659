//! Satchel - run commands with encrypted secrets injected as env vars.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use satchel::cli::output;
use satchel::cli::{execute, Cli};
use satchel::error::SatchelError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support. Logs go to
    // stderr so the child command's stdout passes through untouched.
    let filter = EnvFilter::try_from_env("SATCHEL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("satchel=debug")
        } else {
            EnvFilter::new("satchel=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.file, cli.sops) {
        // Format error with suggestion if available
        let suggestion = match &e {
            SatchelError::NotFound(_) => Some("encrypt one with: sops --encrypt .env > .env.enc"),
            SatchelError::Decryption(_) => Some("run: satchel check"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
