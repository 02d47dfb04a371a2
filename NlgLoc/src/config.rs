//! User configuration
//!
//! Settings are read from `config.toml` in the platform config directory
//! (e.g. `~/.config/nlgloc/config.toml` on Linux). Every field is optional:
//!
//! ```toml
//! plaintext_path = "/path/to/nlg_hash_plaintext_data.txt"
//! output_endian = "big"
//! sort_by_id = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formats::Endian;
use crate::hash::{PLAINTEXT_FILE_NAME, PlaintextRegistry};

/// Environment variable that overrides the word list location
pub const PLAINTEXT_ENV_VAR: &str = "NLGLOC_PLAINTEXT";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list used to show hash values as plaintext
    pub plaintext_path: Option<PathBuf>,
    /// Byte order for binary output
    pub output_endian: Endian,
    /// Sort messages by ID before writing
    pub sort_by_id: bool,
}

impl Config {
    /// Default location of the config file
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nlgloc").join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location
    ///
    /// A missing file gives the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from a specific file; a missing file gives the defaults
    ///
    /// # Errors
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a config from TOML text
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if the TOML is malformed.
    ///
    /// [`Error::ConfigError`]: crate::Error::ConfigError
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Where to look for the plaintext word list
    ///
    /// In order: the `NLGLOC_PLAINTEXT` environment variable, the config
    /// file, then the default file name next to the running executable.
    #[must_use]
    pub fn resolve_plaintext_path(&self) -> Option<PathBuf> {
        let from_env = std::env::var_os(PLAINTEXT_ENV_VAR).map(PathBuf::from);
        self.resolve_plaintext_path_from(from_env)
    }

    fn resolve_plaintext_path_from(&self, from_env: Option<PathBuf>) -> Option<PathBuf> {
        from_env
            .or_else(|| self.plaintext_path.clone())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(|dir| dir.join(PLAINTEXT_FILE_NAME)))
            })
    }

    /// Build the plaintext registry for this config
    ///
    /// The word list isn't read until the first lookup.
    #[must_use]
    pub fn plaintext_registry(&self) -> PlaintextRegistry {
        match self.resolve_plaintext_path() {
            Some(path) => PlaintextRegistry::from_path(path),
            None => PlaintextRegistry::empty(),
        }
    }
}
