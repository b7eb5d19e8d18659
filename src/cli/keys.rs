//! Keys command.
//!
//! Lists the key names a secrets file would inject. Values are decrypted in
//! memory to parse the payload but never printed.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::source::SecretsFile;
use crate::core::{decrypt, parse};
use crate::error::Result;

/// List secret key names.
pub fn execute(file: Option<String>, sops: Option<String>, json: bool) -> Result<()> {
    let settings = Config::resolve(file, sops)?;

    let source = SecretsFile::resolve(&settings.file)?;
    let payload = decrypt::decrypt(&source, &settings.sops)?;
    let map = parse::parse(&payload);

    if json {
        let keys: Vec<&str> = map.keys().collect();
        println!("{}", serde_json::to_string_pretty(&keys).unwrap_or_default());
        return Ok(());
    }

    if map.is_empty() {
        output::dimmed("no secrets found");
        return Ok(());
    }

    output::success(&format!(
        "{} secrets in {} ({})",
        map.len(),
        source.path.display(),
        source.format
    ));
    for key in map.keys() {
        output::list_item(key);
    }

    Ok(())
}
