//! Resource filtering.
//!
//! A [`FilterSelection`] is the transient combination of a free-text search
//! and up to four equality constraints. A resource passes when it satisfies
//! ALL active constraints (AND logic, never OR). Unset constraints and an
//! empty search impose nothing, so an empty selection is the identity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Result, ShelfError};
use crate::model::{Classification, Level, Priority, Resource, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Case-insensitive substring matched against title and description.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Uuid) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// True when the selection imposes no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.level.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_text(resource)
            && self.category.is_none_or(|c| resource.category_id == Some(c))
            && constraint_holds(self.level, resource.level)
            && constraint_holds(self.priority, resource.priority)
            && constraint_holds(self.status, resource.status)
    }

    fn matches_text(&self, resource: &Resource) -> bool {
        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();

        resource.title.to_lowercase().contains(&term)
            || resource
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}

/// An unset constraint holds for everything. A set one holds only for an
/// equal, known value.
fn constraint_holds<T: Classification>(wanted: Option<T>, actual: T) -> bool {
    wanted.is_none_or(|w| w.is_known() && w == actual)
}

/// Keeps the resources matching `selection`, preserving input order.
///
/// Generic over anything that exposes a [`Resource`], so indexed lists can be
/// filtered without losing their display numbers.
pub fn filter_resources<T: AsRef<Resource>>(items: Vec<T>, selection: &FilterSelection) -> Vec<T> {
    if selection.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| selection.matches(item.as_ref()))
        .collect()
}

/// Parses a raw filter value where `""` and `"all"` mean "no constraint".
pub fn parse_constraint<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr<Err = ShelfError>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
