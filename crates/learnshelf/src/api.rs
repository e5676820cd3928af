//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all learnshelf operations, regardless of the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Holds the session**, so callers never pass user identity around
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings to [`ResourceSelector`]s,
//!   category names to ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`
//!
//! API tests verify dispatch and argument handling only; command logic is
//! tested in the command modules.

use uuid::Uuid;

use crate::commands::{self, CmdResult};
use crate::draft::ResourceDraft;
use crate::error::{Result, ShelfError};
use crate::filter::FilterSelection;
use crate::index::{parse_index_or_range, parse_selectors, ResourceSelector};
use crate::model::{Progress, Status};
use crate::session::Session;
use crate::store::DataStore;

/// The main API facade for learnshelf operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, session: Session) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn create_resource(&mut self, draft: ResourceDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &self.session, draft)
    }

    pub fn get_resources(&self, selection: &FilterSelection) -> Result<CmdResult> {
        commands::get::run(&self.store, &self.session, selection)
    }

    pub fn view_resources<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &self.session, &selectors)
    }

    /// Overwrites exactly one resource; ranges are rejected.
    pub fn update_resource(&mut self, selector: &str, draft: ResourceDraft) -> Result<CmdResult> {
        let parsed = parse_index_or_range(selector)?;
        if matches!(parsed, ResourceSelector::Range(..)) {
            return Err(ShelfError::Api(format!(
                "Edit takes a single resource, got {}",
                selector
            )));
        }
        let selector = parsed;
        commands::update::run(&mut self.store, &self.session, selector, draft)
    }

    pub fn set_progress<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        progress: Option<Progress>,
        status: Option<Status>,
    ) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::progress::run(&mut self.store, &self.session, &selectors, progress, status)
    }

    pub fn delete_resources<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &self.session, &selectors)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store, &self.session)
    }

    pub fn list_categories(&self) -> Result<CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn create_category(
        &mut self,
        name: &str,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<CmdResult> {
        commands::categories::create(&mut self.store, name, description, color)
    }

    /// Resolves a category given by id or by (case-insensitive) name.
    pub fn resolve_category(&self, raw: &str) -> Result<Uuid> {
        let raw = raw.trim();
        let categories = self.store.load_categories()?;

        if let Ok(id) = Uuid::parse_str(raw) {
            return categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.id)
                .ok_or(ShelfError::CategoryNotFound(id));
        }

        categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(raw))
            .map(|c| c.id)
            .ok_or_else(|| ShelfError::Validation(format!("Unknown category: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        ShelfApi::new(InMemoryStore::new(), Session::new("tester").unwrap())
    }

    #[test]
    fn test_create_and_get() {
        let mut api = api();
        api.create_resource(ResourceDraft::new("One")).unwrap();
        api.create_resource(ResourceDraft::new("Two")).unwrap();

        let result = api.get_resources(&FilterSelection::default()).unwrap();
        assert_eq!(result.listed_resources.len(), 2);
        assert_eq!(result.stats.unwrap().total, 2);
    }

    #[test]
    fn test_view_parses_selectors() {
        let mut api = api();
        for title in ["A", "B", "C"] {
            api.create_resource(ResourceDraft::new(title)).unwrap();
        }
        let result = api.view_resources(&["1-2", "2"]).unwrap();
        assert_eq!(result.listed_resources.len(), 2);

        assert!(api.view_resources(&["x"]).is_err());
    }

    #[test]
    fn test_update_rejects_ranges() {
        let mut api = api();
        api.create_resource(ResourceDraft::new("A")).unwrap();
        api.create_resource(ResourceDraft::new("B")).unwrap();

        assert!(api
            .update_resource("1-2", ResourceDraft::new("Both"))
            .is_err());

        let mut draft = ResourceDraft::new("Edited");
        draft.level = Level::Intermediate;
        let result = api.update_resource("1", draft).unwrap();
        assert_eq!(result.affected_resources[0].title, "Edited");
    }

    #[test]
    fn test_progress_and_delete_dispatch() {
        let mut api = api();
        api.create_resource(ResourceDraft::new("A")).unwrap();

        let result = api
            .set_progress(&["1"], Some(Progress::new(75).unwrap()), None)
            .unwrap();
        assert_eq!(result.affected_resources[0].progress.value(), 75);
        assert_eq!(api.stats().unwrap().stats.unwrap().avg_progress, 75.0);

        api.delete_resources(&["1"]).unwrap();
        assert_eq!(api.stats().unwrap().stats.unwrap().total, 0);
    }

    #[test]
    fn test_resolve_category_by_name_or_id() {
        let mut api = api();
        let created = api.create_category("Web", None, None).unwrap();
        let web = created.categories[0].id;

        assert_eq!(api.resolve_category("web").unwrap(), web);
        assert_eq!(api.resolve_category(&web.to_string()).unwrap(), web);
        assert!(api.resolve_category("Cooking").is_err());
        assert!(matches!(
            api.resolve_category(&Uuid::new_v4().to_string()),
            Err(ShelfError::CategoryNotFound(_))
        ));
        assert_eq!(api.list_categories().unwrap().categories.len(), 1);
    }
}
