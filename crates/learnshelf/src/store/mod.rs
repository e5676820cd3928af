//! # Storage Layer
//!
//! This module defines the Resource Store Accessor for learnshelf. The
//! [`DataStore`] trait is everything the rest of the crate knows about
//! persistence: load a user's resources, load categories, and apply
//! create / update / delete mutations.
//!
//! ## Two Layers
//!
//! 1. [`backend::StorageBackend`]: raw table I/O. Load and save whole tables,
//!    nothing else. Knows nothing about users or validation.
//! 2. [`resource_store::ResourceStore`]: the business rules on top of any
//!    backend. Implements [`DataStore`].
//!
//! ## Rules Enforced by ResourceStore
//!
//! - **Ownership**: every resource call takes a [`Session`]. Reads return only
//!   the session user's resources; touching someone else's resource reports
//!   `NotFound`, exactly as if it did not exist.
//! - **Validation**: drafts are validated (and normalized) before they reach
//!   the backend, including the category reference.
//! - **Ordering**: resources come back newest first; categories by name.
//! - **Timestamps**: `created_at` is fixed at creation, `updated_at` moves on
//!   every update.
//! - **Cascade**: links and files are stored inline, so deleting a resource
//!   deletes its attachments in the same write.
//!
//! ## Consistency
//!
//! Each mutation is a read-modify-write of one table. Backends make the write
//! atomic. Two processes writing concurrently resolve as last-write-wins;
//! a stale in-memory list is only corrected by the next full load.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON tables in a data directory.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── resources.json      # All users' resources, links and files inline
//! └── categories.json     # Global categories
//! ```

use crate::draft::ResourceDraft;
use crate::error::Result;
use crate::model::{Category, Resource};
use crate::session::Session;
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod resource_store;

/// Abstract interface for resource storage.
pub trait DataStore {
    /// All resources owned by the session user, newest first.
    fn load_resources(&self, session: &Session) -> Result<Vec<Resource>>;

    /// All categories, sorted by name.
    fn load_categories(&self) -> Result<Vec<Category>>;

    /// A single resource owned by the session user.
    fn get_resource(&self, session: &Session, id: &Uuid) -> Result<Resource>;

    /// Validate the draft and store it as a new resource for the session user.
    fn create_resource(&mut self, session: &Session, draft: ResourceDraft) -> Result<Resource>;

    /// Overwrite every editable field of an existing resource.
    fn update_resource(
        &mut self,
        session: &Session,
        id: &Uuid,
        draft: ResourceDraft,
    ) -> Result<Resource>;

    /// Delete a resource together with its links and files.
    fn delete_resource(&mut self, session: &Session, id: &Uuid) -> Result<()>;

    /// Add a global category.
    fn create_category(
        &mut self,
        name: &str,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<Category>;
}
