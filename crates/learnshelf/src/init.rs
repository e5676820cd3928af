//! # Context Setup
//!
//! [`initialize`] turns configuration into a ready-to-use [`ShelfContext`]:
//!
//! 1. Locate `learnshelf.toml` in the OS config directory (or use the path
//!    the caller passes).
//! 2. Load [`ShelfConfig`] from the environment and that file.
//! 3. Pick the data directory: `data_dir` from config, else the OS data
//!    directory (via the `directories` crate).
//! 4. Build the [`Session`]: an explicit user override wins over the
//!    configured user, which falls back to `local`.
//! 5. Open a [`FileStore`] over the data directory and wrap it in the API.
//!
//! Nothing is written to disk here; directories are created on first save.

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

use crate::api::ShelfApi;
use crate::config::{ShelfConfig, CONFIG_FILE};
use crate::error::{Result, ShelfError};
use crate::session::Session;
use crate::store::fs::FileStore;

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "learnshelf", "learnshelf")
        .ok_or_else(|| ShelfError::Config("Could not determine home directory".into()))
}

/// Default location of `learnshelf.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Loads configuration and builds the context.
///
/// * `config_path` - explicit config file; `None` uses [`default_config_path`]
/// * `user_override` - user id from the command line, beats the config
pub fn initialize(
    config_path: Option<PathBuf>,
    user_override: Option<String>,
) -> Result<ShelfContext> {
    let config_path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    debug!(path = %config_path.display(), "loading config");
    let config = ShelfConfig::load(&config_path)?;
    initialize_with(config, user_override)
}

/// Builds the context from an already loaded configuration.
pub fn initialize_with(config: ShelfConfig, user_override: Option<String>) -> Result<ShelfContext> {
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => project_dirs()?.data_dir().to_path_buf(),
    };

    let user = user_override.unwrap_or_else(|| config.user().to_string());
    let session = Session::new(user)?;
    let store = FileStore::new(data_dir.clone());
    debug!(user = session.user_id(), store = %store.location().display(), "context ready");

    let api = ShelfApi::new(store, session);
    Ok(ShelfContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ResourceDraft;
    use crate::filter::FilterSelection;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ShelfConfig {
        ShelfConfig {
            data_dir: Some(dir.path().join("data")),
            user: Some("ada".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_uses_configured_dir_and_user() {
        let dir = TempDir::new().unwrap();
        let ctx = initialize_with(config_in(&dir), None).unwrap();

        assert_eq!(ctx.data_dir, dir.path().join("data"));
        assert_eq!(ctx.api.session().user_id(), "ada");
    }

    #[test]
    fn test_user_override_wins() {
        let dir = TempDir::new().unwrap();
        let ctx = initialize_with(config_in(&dir), Some("grace".into())).unwrap();
        assert_eq!(ctx.api.session().user_id(), "grace");
    }

    #[test]
    fn test_blank_override_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(initialize_with(config_in(&dir), Some(" ".into())).is_err());
    }

    #[test]
    fn test_initialize_reads_config_file() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("shelf");
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            format!(
                "data_dir = {:?}\nuser = \"lin\"\n",
                data_dir.to_string_lossy()
            ),
        )
        .unwrap();

        let mut ctx = initialize(Some(config_path), None).unwrap();
        assert_eq!(ctx.data_dir, data_dir);

        ctx.api
            .create_resource(ResourceDraft::new("Persisted"))
            .unwrap();
        assert!(data_dir.join("resources.json").exists());

        let listed = ctx.api.get_resources(&FilterSelection::default()).unwrap();
        assert_eq!(listed.listed_resources[0].resource.user_id, "lin");
    }
}
