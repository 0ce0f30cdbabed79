//! Configuration management for hisn.
//!
//! Configuration is read from `~/.config/hisn/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::index::DEFAULT_WORKERS;

/// Base location of the hadith corpus, laid out as one JSON document per
/// book under `the_9_books/`, `other_books/` and `forties/`.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/AhmedBaset/hadith-json/main/db/by_book/";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// A base URL or a local directory.
    pub source: String,
    /// Upper bound on concurrent book loads during a scan.
    pub workers: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            workers: DEFAULT_WORKERS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Database file; defaults to the platform data directory.
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if config.corpus.workers == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "corpus.workers must be at least 1".into(),
            });
        }

        Ok(config)
    }

    /// Get the default config file path: `~/.config/hisn/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hisn").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        format!(
            r##"# hisn configuration
#
# The corpus source is either an http(s) base URL or a local directory.
# Both must contain the_9_books/, other_books/ and forties/ with one
# <book>.json document per book.

[corpus]
source = "{source}"

# Maximum number of books loaded concurrently during a scan
workers = {workers}

[favorites]
# SQLite database holding favorite supplications and remembrances.
# Defaults to the platform data directory when unset.
# db_path = "/path/to/hisn.db"
"##,
            source = DEFAULT_SOURCE,
            workers = DEFAULT_WORKERS,
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
