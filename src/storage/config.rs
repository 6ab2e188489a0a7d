//! Configuration handling for alie
//!
//! Two paths are configurable: the JSON store and the generated shell file.
//! Each resolves from an explicit value first, then the environment
//! (`ALIE_JSON_PATH`, `ALIE_ALIASES_PATH`), then a dotfile in the user's home
//! directory (`~/.alie.json`, `~/.alie`).

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Environment variable overriding the JSON store path
pub const JSON_PATH_ENV: &str = "ALIE_JSON_PATH";

/// Environment variable overriding the generated shell file path
pub const ALIASES_PATH_ENV: &str = "ALIE_ALIASES_PATH";

/// Default JSON store file name, relative to the home directory
pub const DEFAULT_JSON_FILE: &str = ".alie.json";

/// Default shell file name, relative to the home directory
pub const DEFAULT_ALIASES_FILE: &str = ".alie";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine home directory; set ALIE_JSON_PATH and ALIE_ALIASES_PATH")]
    NoHomeDir,
}

/// Locations of the files an [`AliasStore`](super::AliasStore) manages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON store holding the alias definitions
    pub json_path: PathBuf,

    /// Shell script regenerated after every mutation
    pub aliases_path: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration with explicit paths
    pub fn new(json_path: impl Into<PathBuf>, aliases_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
            aliases_path: aliases_path.into(),
        }
    }

    /// Creates the default configuration rooted at `home`
    pub fn in_dir(home: &Path) -> Self {
        Self::new(home.join(DEFAULT_JSON_FILE), home.join(DEFAULT_ALIASES_FILE))
    }

    /// Resolves paths from explicit overrides, falling back to the home directory
    ///
    /// The CLI fills the overrides from flags or the `ALIE_*` environment
    /// variables. The home directory is only looked up when a path is missing.
    pub fn resolve(
        json_path: Option<PathBuf>,
        aliases_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match (json_path, aliases_path) {
            (Some(json), Some(aliases)) => Ok(Self::new(json, aliases)),
            (json, aliases) => {
                let defaults = Self::in_dir(&Self::home_dir()?);
                Ok(Self {
                    json_path: json.unwrap_or(defaults.json_path),
                    aliases_path: aliases.unwrap_or(defaults.aliases_path),
                })
            }
        }
    }

    /// Returns the user's home directory
    pub fn home_dir() -> Result<PathBuf, ConfigError> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(ConfigError::NoHomeDir)
    }
}
