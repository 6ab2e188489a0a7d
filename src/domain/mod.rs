//! Domain models for alie
//!
//! Contains the alias types and name normalization without any I/O concerns.

mod alias;
mod slug;

pub use alias::{render_script, AliasEntry, AliasKind, AliasMap};
pub use slug::{is_slug, slugify, SEPARATOR};
