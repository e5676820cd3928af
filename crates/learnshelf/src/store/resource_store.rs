use super::backend::{ResourceRow, StorageBackend};
use super::DataStore;
use crate::draft::ResourceDraft;
use crate::error::{Result, ShelfError};
use crate::model::{Category, Resource};
use crate::session::Session;
use chrono::Utc;
use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

pub struct ResourceStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ResourceStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Finds the position of a resource owned by the session user.
    /// Foreign resources are reported as missing, never as forbidden.
    fn position_owned(rows: &[ResourceRow], session: &Session, id: &Uuid) -> Result<usize> {
        rows.iter()
            .position(|row| row_id(row) == Some(*id) && row_owned_by(row, session.user_id()))
            .ok_or(ShelfError::NotFound(*id))
    }
}

fn row_id(row: &ResourceRow) -> Option<Uuid> {
    row.get("id")?.as_str().and_then(|s| Uuid::parse_str(s).ok())
}

fn row_owned_by(row: &ResourceRow, user_id: &str) -> bool {
    row.get("user_id").and_then(ResourceRow::as_str) == Some(user_id)
}

fn decode_row(row: &ResourceRow) -> Result<Resource> {
    Resource::deserialize(row).map_err(ShelfError::Serialization)
}

fn encode_row(resource: &Resource) -> Result<ResourceRow> {
    serde_json::to_value(resource).map_err(ShelfError::Serialization)
}

/// Newest first, ties broken by id so the order is total.
fn sort_newest_first(resources: &mut [Resource]) {
    resources.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl<B: StorageBackend> DataStore for ResourceStore<B> {
    fn load_resources(&self, session: &Session) -> Result<Vec<Resource>> {
        let mut owned: Vec<Resource> = self
            .backend
            .load_resources()?
            .iter()
            .filter(|row| row_owned_by(row, session.user_id()))
            .filter_map(|row| match decode_row(row) {
                Ok(resource) => Some(resource),
                Err(err) => {
                    tracing::warn!(id = ?row_id(row), %err, "skipping unreadable resource row");
                    None
                }
            })
            .collect();
        sort_newest_first(&mut owned);
        Ok(owned)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.backend.load_categories()?;
        categories.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(categories)
    }

    fn get_resource(&self, session: &Session, id: &Uuid) -> Result<Resource> {
        let rows = self.backend.load_resources()?;
        let pos = Self::position_owned(&rows, session, id)?;
        decode_row(&rows[pos])
    }

    fn create_resource(&mut self, session: &Session, draft: ResourceDraft) -> Result<Resource> {
        let categories = self.backend.load_categories()?;
        let draft = draft.validate(&categories)?;

        let now = Utc::now();
        let resource = draft.into_resource(Uuid::new_v4(), session.user_id().to_string(), now, now);

        let mut rows = self.backend.load_resources()?;
        rows.push(encode_row(&resource)?);
        self.backend.save_resources(&rows)?;

        tracing::debug!(resource = %resource.id, user = session.user_id(), "created resource");
        Ok(resource)
    }

    fn update_resource(
        &mut self,
        session: &Session,
        id: &Uuid,
        draft: ResourceDraft,
    ) -> Result<Resource> {
        let mut rows = self.backend.load_resources()?;
        let pos = Self::position_owned(&rows, session, id)?;
        let existing = decode_row(&rows[pos])?;

        let categories = self.backend.load_categories()?;
        let draft = draft.validate(&categories)?;

        let updated = draft.into_resource(
            existing.id,
            existing.user_id,
            existing.created_at,
            Utc::now(),
        );
        rows[pos] = encode_row(&updated)?;
        self.backend.save_resources(&rows)?;

        tracing::debug!(resource = %id, user = session.user_id(), "updated resource");
        Ok(updated)
    }

    fn delete_resource(&mut self, session: &Session, id: &Uuid) -> Result<()> {
        let mut rows = self.backend.load_resources()?;
        let pos = Self::position_owned(&rows, session, id)?;

        // Links and files are stored inline and go with the row.
        rows.remove(pos);
        self.backend.save_resources(&rows)?;

        tracing::debug!(resource = %id, user = session.user_id(), "deleted resource");
        Ok(())
    }

    fn create_category(
        &mut self,
        name: &str,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShelfError::Validation("category name is required".into()));
        }

        let mut categories = self.backend.load_categories()?;
        if categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(ShelfError::Validation(format!(
                "category '{}' already exists",
                name
            )));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let color = color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let category = Category::new(name.to_string(), description, color);
        categories.push(category.clone());
        self.backend.save_categories(&categories)?;

        tracing::debug!(category = %category.id, name, "created category");
        Ok(category)
    }
}
