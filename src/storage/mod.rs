//! # Storage Layer
//!
//! Persistence for alie: a JSON store of alias definitions plus a shell
//! script regenerated from it.
//!
//! ## Storage Formats
//!
//! | Data | Format | Default location | Override |
//! |------|--------|------------------|----------|
//! | Aliases | JSON object keyed by name | `~/.alie.json` | `ALIE_JSON_PATH` |
//! | Shell file | One `alias`/`function` line per entry | `~/.alie` | `ALIE_ALIASES_PATH` |
//!
//! ## Consistency
//!
//! - Every mutation rewrites the JSON store, then the shell file
//! - Both files are replaced atomically (temp file + rename)
//! - No cross-process locking: concurrent invocations are last-writer-wins
//!
//! ## Key Types
//!
//! - [`AliasStore`] - Read, write, delete and regenerate
//! - [`StoreConfig`] - Where the two files live

mod alias_store;
mod config;

pub use alias_store::{AliasStore, StoreError};
pub use config::{
    ConfigError, StoreConfig, ALIASES_PATH_ENV, DEFAULT_ALIASES_FILE, DEFAULT_JSON_FILE,
    JSON_PATH_ENV,
};
