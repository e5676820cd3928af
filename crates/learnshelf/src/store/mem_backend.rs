use super::backend::{ResourceRow, StorageBackend};
use crate::error::{Result, ShelfError};
use crate::model::Category;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since learnshelf is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    resources: RefCell<Vec<ResourceRow>>,
    categories: RefCell<Vec<Category>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_resources(&self) -> Result<Vec<ResourceRow>> {
        Ok(self.resources.borrow().clone())
    }

    fn save_resources(&self, rows: &[ResourceRow]) -> Result<()> {
        self.check_writable()?;
        *self.resources.borrow_mut() = rows.to_vec();
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.check_writable()?;
        *self.categories.borrow_mut() = categories.to_vec();
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://learnshelf")
    }
}
