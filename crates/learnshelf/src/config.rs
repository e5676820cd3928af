//! # Configuration
//!
//! learnshelf configuration is managed by [`confique`], which handles layered
//! loading from a TOML file and environment variables.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Command line flags**: e.g. `--user` (applied by the caller).
//! 2. **Environment variables**: `LEARNSHELF_DATA_DIR`, `LEARNSHELF_USER`, ...
//! 3. **Config file**: `learnshelf.toml` in the OS config directory
//!    (via the `directories` crate).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_dir` | `LEARNSHELF_DATA_DIR` | OS data dir | Where `resources.json` and `categories.json` live |
//! | `user` | `LEARNSHELF_USER` | `local` | User id for the session |
//! | `default_level` | `LEARNSHELF_DEFAULT_LEVEL` | `beginner` | Level for new resources |
//! | `default_priority` | `LEARNSHELF_DEFAULT_PRIORITY` | `medium` | Priority for new resources |
//!
//! ## CLI Usage
//!
//! - `learnshelf config` shows the effective configuration.
//! - `learnshelf config gen` prints a commented sample `learnshelf.toml`.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::model::{Level, Priority};

pub const CONFIG_FILE: &str = "learnshelf.toml";
pub const DEFAULT_USER: &str = "local";

/// Configuration for learnshelf, stored in `learnshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding the resource and category tables.
    /// When absent, the OS data directory is used.
    #[config(env = "LEARNSHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// User id that owns new resources and scopes listings.
    #[config(env = "LEARNSHELF_USER")]
    pub user: Option<String>,

    /// Level given to new resources when none is passed
    /// (beginner, intermediate, advanced).
    #[config(default = "beginner", env = "LEARNSHELF_DEFAULT_LEVEL")]
    pub default_level: String,

    /// Priority given to new resources when none is passed (low, medium, high).
    #[config(default = "medium", env = "LEARNSHELF_DEFAULT_PRIORITY")]
    pub default_priority: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            user: None,
            default_level: Level::default().to_string(),
            default_priority: Priority::default().to_string(),
        }
    }
}

impl ShelfConfig {
    /// Loads from the environment, then `path` if it exists.
    pub fn load(path: &Path) -> Result<Self> {
        let config = ShelfConfig::builder().env().file(path).load()?;
        config.level()?;
        config.priority()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<Level> {
        self.default_level
            .parse()
            .map_err(|e: ShelfError| ShelfError::Config(format!("default_level: {}", e)))
    }

    pub fn priority(&self) -> Result<Priority> {
        self.default_priority
            .parse()
            .map_err(|e: ShelfError| ShelfError::Config(format!("default_priority: {}", e)))
    }

    /// The configured user, or [`DEFAULT_USER`] when unset or blank.
    pub fn user(&self) -> &str {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_USER)
    }
}

/// A commented TOML template listing every setting.
pub fn template() -> String {
    confique::toml::template::<ShelfConfig>(confique::toml::FormatOptions::default())
}
