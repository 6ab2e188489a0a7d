//! # Command-Line Interface
//!
//! User-facing command and output formatting.
//!
//! ## Usage
//!
//! | Invocation | Effect |
//! |------------|--------|
//! | `alie` | List registered aliases and functions |
//! | `alie NAME` | Remove `NAME` if registered |
//! | `alie NAME COMMAND` | Register or overwrite `NAME` as an alias |
//! | `alie NAME COMMAND -f` | Register `NAME` as a shell function |
//!
//! Names are normalized to slugs before use, so `alie "Git Log" "git log"`
//! registers `git_log`.
//!
//! ## Output Formats
//!
//! `--format text` (default) prints colored human-readable output when
//! stdout is a terminal; `--format json` prints one JSON object.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! alie --verbose ll 'ls -la'
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate action.

mod app;
mod output;
mod alias_cmd;

pub use app::{Action, Cli, run};
pub use output::{Output, OutputFormat};
