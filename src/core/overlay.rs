//! Environment overlay with guaranteed revert.
//!
//! The overlay records exactly which variable names it set so they can be
//! unset afterward. Revert happens in `Drop`, so whatever stage of the
//! pipeline fails, the overlay is cleared before control returns to the
//! caller and no secret leaks into the surrounding process environment.
//!
//! Known behavior: a pre-existing variable that shares a secret's name is
//! overwritten on apply and unset on revert, not restored to its old value.

use zeroize::Zeroizing;

use crate::core::parse::SecretMap;

/// The set of environment variable names applied by one pipeline run.
///
/// Reverts on drop.
#[derive(Debug)]
pub struct EnvOverlay {
    applied: Vec<String>,
}

impl EnvOverlay {
    /// Set a process-wide environment variable for every entry in the map.
    ///
    /// Returns the overlay guard holding the applied names in application
    /// order.
    pub fn apply(map: &SecretMap) -> Self {
        let mut applied = Vec::with_capacity(map.len());
        for (key, value) in map.iter() {
            // Wipe the local plaintext copy once handed to the environment.
            let value = Zeroizing::new(value.to_string());
            std::env::set_var(key, value.as_str());
            applied.push(key.to_string());
        }
        tracing::debug!(count = applied.len(), "applied environment overlay");
        Self { applied }
    }

    /// Applied variable names, in application order.
    pub fn keys(&self) -> &[String] {
        &self.applied
    }
}

impl Drop for EnvOverlay {
    fn drop(&mut self) {
        for key in &self.applied {
            std::env::remove_var(key);
        }
        tracing::debug!(count = self.applied.len(), "reverted environment overlay");
    }
}
