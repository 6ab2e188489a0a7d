//! alie - register shell aliases from the command line
//!
//! Aliases and functions are kept in a JSON store and rendered into a shell
//! file that a profile can `source`. Every change regenerates that file, so
//! new shells always see the full current set.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{AliasEntry, AliasKind, AliasMap};
pub use storage::{AliasStore, StoreConfig, StoreError};
