//! JSON storage for aliases
//!
//! Aliases live in a single JSON object keyed by name. Every mutation
//! rewrites the whole store and then regenerates the shell file from it, so
//! the two files always describe the same set of aliases.
//!
//! Reads are forgiving: a missing, empty or corrupt store reads as empty, and
//! a single malformed entry is skipped without losing its siblings. Writes
//! are not: any I/O failure is returned to the caller.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::StoreConfig;
use crate::domain::{render_script, AliasEntry, AliasMap};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse alias store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize alias store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if the store file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Store for alias definitions and their generated shell file
pub struct AliasStore {
    config: StoreConfig,
}

impl AliasStore {
    /// Creates a store over the given file locations
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Returns the path to the JSON store
    pub fn json_path(&self) -> &Path {
        &self.config.json_path
    }

    /// Returns the path to the generated shell file
    pub fn aliases_path(&self) -> &Path {
        &self.config.aliases_path
    }

    /// Loads the store, reporting why it could not be read
    ///
    /// An empty file and a JSON `null` both load as an empty map. Entries
    /// that do not decode (e.g. missing `target`) are dropped individually.
    pub fn load(&self) -> Result<AliasMap, StoreError> {
        let path = self.json_path();
        let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;

        if content.trim().is_empty() {
            return Ok(AliasMap::new());
        }

        let raw: Option<BTreeMap<String, serde_json::Value>> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| {
                serde_json::from_value::<AliasEntry>(value)
                    .ok()
                    .map(|entry| (name, entry))
            })
            .collect())
    }

    /// Reads all aliases, treating a missing or unreadable store as empty
    pub fn read(&self) -> AliasMap {
        self.load().unwrap_or_default()
    }

    /// Inserts or overwrites an alias, then persists and regenerates
    ///
    /// Returns the updated mapping.
    pub fn write(
        &self,
        name: &str,
        target: &str,
        is_function: bool,
    ) -> Result<AliasMap, StoreError> {
        let mut aliases = self.read();
        let entry = if is_function {
            AliasEntry::function(target)
        } else {
            AliasEntry::alias(target)
        };
        aliases.insert(name.to_string(), entry);

        self.save(&aliases)?;
        self.regenerate()?;
        Ok(aliases)
    }

    /// Removes an alias if present, then persists and regenerates
    ///
    /// Removing an unknown name is not an error. Returns the updated mapping.
    pub fn delete(&self, name: &str) -> Result<AliasMap, StoreError> {
        let mut aliases = self.read();
        aliases.remove(name);

        self.save(&aliases)?;
        self.regenerate()?;
        Ok(aliases)
    }

    /// Rewrites the shell file from the current contents of the store
    ///
    /// Returns the number of definitions written.
    pub fn regenerate(&self) -> Result<usize, StoreError> {
        let aliases = self.read();
        let script = render_script(&aliases);
        write_atomic(self.aliases_path(), script.as_bytes())?;
        Ok(aliases.len())
    }

    /// Writes the full mapping to the JSON store (sorted keys, 4-space indent)
    fn save(&self, aliases: &AliasMap) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        aliases.serialize(&mut serializer)?;
        buf.push(b'\n');

        write_atomic(self.json_path(), &buf)
    }
}

/// Replaces `path` with `content` via a sibling temp file and rename
///
/// A symlinked destination is written through: the temp file is placed next
/// to the file the link points at, the link itself stays, and the existing
/// file's permissions carry over.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let path = resolve_destination(path)?;
    let path = path.as_path();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;

        if let Ok(existing) = fs::metadata(path) {
            file.set_permissions(existing.permissions())
                .map_err(|e| StoreError::io(&temp_path, e))?;
        }

        let mut writer = BufWriter::new(file);
        writer
            .write_all(content)
            .and_then(|_| writer.flush())
            .map_err(|e| StoreError::io(&temp_path, e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| StoreError::io(path, e))
}

/// Follows symlinks to the file that should actually be replaced
///
/// Dangling links resolve to their (possibly relative) target so the first
/// write creates the file the link expects.
fn resolve_destination(path: &Path) -> Result<PathBuf, StoreError> {
    let mut current = path.to_path_buf();

    // Bounded to avoid looping on a symlink cycle
    for _ in 0..32 {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::read_link(&current).map_err(|e| StoreError::io(&current, e))?;
                current = match current.parent() {
                    Some(parent) if target.is_relative() => parent.join(target),
                    _ => target,
                };
            }
            _ => return Ok(current),
        }
    }

    Err(StoreError::io(
        path,
        io::Error::new(io::ErrorKind::Other, "too many levels of symbolic links"),
    ))
}

/// `~/.alie.json` -> `~/.alie.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
