//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, key names
//! - Bold: important values
//! - Dimmed: secondary info
//!
//! Errors and warnings go to stderr; the child command's stdout must pass
//! through satchel untouched.

use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ 2 secrets loaded`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secrets file not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").for_stderr().red(), msg);
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ no secrets loaded`
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").for_stderr().yellow(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: satchel check`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").for_stderr().cyan(), style(msg).for_stderr().cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  format:  dotenv`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        style(label).dim(),
        style(value.to_string()).bold()
    );
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Start a progress line in the format `label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    print!("{}... ", style(label).dim());
    let _ = io::stdout().flush();
}

/// Finish a progress line with an ok/failed indicator.
pub fn progress_done(ok: bool) {
    if ok {
        println!("{}", style("ok").green());
    } else {
        println!("{}", style("failed").red());
    }
}
