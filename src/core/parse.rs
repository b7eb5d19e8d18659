//! Flat key/value parsers for decrypted payloads.
//!
//! Three formats are supported, dispatched on the payload's format tag:
//!
//! - *dotenv*: `KEY=VALUE` lines, `#` comments and blank lines skipped.
//! - *yaml*: the same line-based algorithm splitting on the first `:`. Only
//!   flat one-level documents are supported; nested structures, lists and
//!   multi-line scalars are a known limitation, not a bug.
//! - *json*: a flat object of string/number/bool values, each stringified.
//!   Nested objects and arrays are skipped (known limitation).

use serde_json::Value;

use crate::core::decrypt::DecryptedPayload;
use crate::core::format::SecretsFormat;

/// Ordered mapping from secret name to string value.
///
/// Keys are case-sensitive; the last occurrence of a duplicate key wins,
/// keeping the position of its first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SecretMap {
    entries: Vec<(String, String)>,
}

impl SecretMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting the value of an existing key in place.
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse a decrypted payload into a flat secret map.
///
/// Returns an empty map (not an error) when the text holds no recognizable
/// entries; callers are expected to warn about that.
pub fn parse(payload: &DecryptedPayload) -> SecretMap {
    let map = match payload.format {
        SecretsFormat::Dotenv => parse_delimited(&payload.text, '='),
        SecretsFormat::Yaml => parse_delimited(&payload.text, ':'),
        SecretsFormat::Json => parse_json(&payload.text),
    };
    tracing::debug!(format = %payload.format, count = map.len(), "parsed secrets payload");
    map
}

/// Line-based parser shared by the dotenv and yaml branches.
///
/// Splits each line on the first `sep`; lines without one are silently
/// dropped. Values keep any further separator characters.
fn parse_delimited(text: &str, sep: char) -> SecretMap {
    let mut map = SecretMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(sep) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = strip_outer_quotes(value.trim());
        map.insert(key.to_string(), value.to_string());
    }

    map
}

/// Strip exactly one matching pair of outer `"…"` or `'…'` quotes.
///
/// No recursive unquoting and no escape-sequence processing.
fn strip_outer_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a flat JSON object of string/number/bool values.
///
/// Unparsable text yields an empty map; zero entries is a reportable but
/// non-fatal condition at the pipeline level.
fn parse_json(text: &str) -> SecretMap {
    let mut map = SecretMap::new();

    let object: serde_json::Map<String, Value> = match serde_json::from_str(text) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!("payload is not a flat json object: {}", e);
            return map;
        }
    };

    for (key, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::debug!("skipping non-scalar json value for {}", key);
                continue;
            }
        };
        map.insert(key, text);
    }

    map
}
