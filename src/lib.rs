//! Satchel - run commands with encrypted secrets injected as environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Decrypt, inject, run a command
//! │   ├── keys          # List secret key names
//! │   ├── check         # Preflight checks (sops, secrets file)
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .satchel.toml management
//!     ├── format        # Secrets file format inference
//!     ├── source        # Secrets file path resolution
//!     ├── decrypt       # External sops invocation
//!     ├── parse         # dotenv / yaml / json flat parsers
//!     ├── overlay       # Environment overlay with guaranteed revert
//!     └── pipeline      # End-to-end orchestration
//! ```
//!
//! # Features
//!
//! - Secrets stay encrypted at rest; plaintext exists only in memory
//! - Flat dotenv, YAML and JSON payloads, inferred from the file extension
//! - Environment overlay reverted unconditionally, even on failure
//! - Child command inherits the terminal and its exit code is mirrored

pub mod cli;
pub mod core;
pub mod error;
