use crate::error::Result;
use crate::model::Category;
use std::path::PathBuf;

/// One stored resource exactly as it sits in the table.
///
/// Rows stay undecoded at this level: a write replaces only the rows it
/// changed, and every other row goes back out as it came in.
pub type ResourceRow = serde_json::Value;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ResourceStore handles the "what" (ownership, validation, ordering).
pub trait StorageBackend {
    // --- Resource Table ---

    /// Load every stored resource row, for all users, in stored order.
    fn load_resources(&self) -> Result<Vec<ResourceRow>>;

    /// Replace the resource table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_resources(&self, rows: &[ResourceRow]) -> Result<()>;

    // --- Category Table ---

    fn load_categories(&self) -> Result<Vec<Category>>;

    fn save_categories(&self, categories: &[Category]) -> Result<()>;

    // --- Paths ---

    /// Where the data lives. For FsBackend the data directory,
    /// for MemBackend a virtual path.
    fn location(&self) -> PathBuf;
}
