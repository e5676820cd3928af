//! # Resource Drafts
//!
//! A [`ResourceDraft`] is the complete set of user-editable fields of a
//! resource. Both create and update take a draft, and update is a full
//! overwrite: whatever the draft says is what the resource becomes.
//!
//! Every field has a defined default, so a caller can never "forget" one and
//! have it silently dropped:
//!
//! | Field | Default |
//! |-------|---------|
//! | `level` | `beginner` |
//! | `priority` | `medium` |
//! | `status` | `not-started` |
//! | `progress` | `0` |
//! | `description`, `category_id` | none |
//! | `links`, `files` | empty |
//! | `is_favorite`, `is_public` | `false` |
//!
//! [`ResourceDraft::validate`] checks and normalizes a draft before a store
//! accepts it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, ShelfError};
use crate::model::{
    Category, Level, Priority, Progress, Resource, ResourceFile, ResourceLink, Status,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceDraft {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub level: Level,
    pub priority: Priority,
    pub status: Status,
    pub progress: Progress,
    pub links: Vec<ResourceLink>,
    pub files: Vec<ResourceFile>,
    pub is_favorite: bool,
    pub is_public: bool,
}

impl ResourceDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Starts a draft from an existing resource, for edits.
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            description: resource.description.clone(),
            category_id: resource.category_id,
            level: resource.level,
            priority: resource.priority,
            status: resource.status,
            progress: resource.progress,
            links: resource.links.clone(),
            files: resource.files.clone(),
            is_favorite: resource.is_favorite,
            is_public: resource.is_public,
        }
    }

    /// Validates against the known categories and returns the normalized draft.
    ///
    /// Normalization trims the title and description (a blank description
    /// becomes `None`) and gives untitled links their URL as title.
    pub fn validate(mut self, categories: &[Category]) -> Result<Self> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(ShelfError::Validation("title is required".into()));
        }

        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Some(category_id) = self.category_id {
            if !categories.iter().any(|c| c.id == category_id) {
                return Err(ShelfError::CategoryNotFound(category_id));
            }
        }

        for link in &mut self.links {
            link.url = link.url.trim().to_string();
            if link.url.is_empty() {
                return Err(ShelfError::Validation("link URL cannot be empty".into()));
            }
            link.title = link.title.trim().to_string();
            if link.title.is_empty() {
                link.title = link.url.clone();
            }
        }

        for file in &self.files {
            if file.name.trim().is_empty() {
                return Err(ShelfError::Validation("file name cannot be empty".into()));
            }
            if file.url.trim().is_empty() {
                return Err(ShelfError::Validation(format!(
                    "file '{}' has no storage URL",
                    file.name
                )));
            }
        }

        Ok(self)
    }

    pub(crate) fn into_resource(
        self,
        id: Uuid,
        user_id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Resource {
        Resource {
            id,
            user_id,
            title: self.title,
            description: self.description,
            category_id: self.category_id,
            level: self.level,
            priority: self.priority,
            status: self.status,
            progress: self.progress,
            links: self.links,
            files: self.files,
            is_favorite: self.is_favorite,
            is_public: self.is_public,
            created_at,
            updated_at,
        }
    }
}

/// Parses `TITLE=URL` or a bare `URL` into a link.
///
/// The split happens at the first `=` only when what precedes it is not
/// itself part of a URL, so `https://x.io/?a=b` stays a bare URL.
pub fn parse_link(raw: &str) -> ResourceLink {
    if let Some((title, url)) = raw.split_once('=') {
        if !title.contains("://") && !title.contains('?') && !url.trim().is_empty() {
            return ResourceLink {
                title: title.trim().to_string(),
                url: url.trim().to_string(),
            };
        }
    }
    ResourceLink {
        title: String::new(),
        url: raw.trim().to_string(),
    }
}
