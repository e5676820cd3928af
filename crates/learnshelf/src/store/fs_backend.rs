use super::backend::{ResourceRow, StorageBackend};
use crate::error::{Result, ShelfError};
use crate::model::Category;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const RESOURCES_FILE: &str = "resources.json";
pub const CATEGORIES_FILE: &str = "categories.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn read_table<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<T> = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded table");
        Ok(rows)
    }

    fn write_table<T: Serialize>(&self, file_name: &str, rows: &[T]) -> Result<()> {
        self.ensure_dir()?;

        let target = self.root.join(file_name);
        let content = serde_json::to_string_pretty(rows).map_err(ShelfError::Serialization)?;

        // Atomic write
        let stem = file_name.trim_end_matches(".json");
        let tmp_file = self.root.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        let written = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &target));
        if let Err(err) = written {
            // Leave no tmp file behind.
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(err));
        }

        tracing::debug!(path = %target.display(), rows = rows.len(), "saved table");
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_resources(&self) -> Result<Vec<ResourceRow>> {
        self.read_table(RESOURCES_FILE)
    }

    fn save_resources(&self, rows: &[ResourceRow]) -> Result<()> {
        self.write_table(RESOURCES_FILE, rows)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.read_table(CATEGORIES_FILE)
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_table(CATEGORIES_FILE, categories)
    }

    fn location(&self) -> PathBuf {
        self.root.clone()
    }
}
