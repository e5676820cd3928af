//! # Domain Model
//!
//! This module defines the core data structures for learnshelf: [`Resource`],
//! [`Category`] and the closed classification enumerations ([`Level`],
//! [`Priority`], [`Status`]).
//!
//! ## Wire Names
//!
//! Enumerations serialize with the names the data has always used:
//!
//! | Type | Values |
//! |------|--------|
//! | [`Level`] | `beginner`, `intermediate`, `advanced` |
//! | [`Priority`] | `low`, `medium`, `high` |
//! | [`Status`] | `not-started`, `in-progress`, `completed` |
//!
//! ## Tolerant Decoding
//!
//! Stored records are not always well formed: older rows may lack a status,
//! carry a progress of `150`, or use a classification value nobody recognizes.
//! [`Resource`] therefore deserializes through a permissive helper:
//!
//! - Missing or unrecognized `level` / `priority` / `status` → `Unknown`.
//!   `Unknown` is never produced by parsing user input, never equals a filter
//!   value and is left out of every per-status count.
//! - Missing `progress` → `0`; out-of-range values are clamped into `0..=100`.
//! - Missing `description`, `category_id`, `links`, `files`, flags → empty.
//!
//! ## Progress vs. Status
//!
//! The two are independently settable. A resource may be `completed` at 40%
//! or sit at 100% while `not-started`. Nothing here couples them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    #[serde(other)]
    Unknown,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not-started",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Unknown => "unknown",
        }
    }
}

/// A closed classification with a stand-in for stored values nobody
/// recognizes.
pub trait Classification: Copy + PartialEq {
    const UNKNOWN: Self;

    fn is_known(&self) -> bool {
        *self != Self::UNKNOWN
    }
}

impl Classification for Level {
    const UNKNOWN: Self = Level::Unknown;
}

impl Classification for Priority {
    const UNKNOWN: Self = Priority::Unknown;
}

impl Classification for Status {
    const UNKNOWN: Self = Status::Unknown;
}

/// Matches `raw` against the wire names in `all`, which never include
/// `unknown`.
///
/// Case and separator insensitive: `In Progress`, `in_progress` and
/// `in-progress` all resolve to the same value.
fn parse_choice<T: Copy>(raw: &str, all: &[T], name: fn(&T) -> &'static str, kind: &str) -> Result<T> {
    let wanted: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect();

    all.iter()
        .find(|v| name(v) == wanted)
        .copied()
        .ok_or_else(|| {
            let valid: Vec<&str> = all.iter().map(name).collect();
            ShelfError::Validation(format!(
                "unknown {} '{}' (expected one of: {})",
                kind,
                raw,
                valid.join(", ")
            ))
        })
}

impl FromStr for Level {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s, &Self::ALL, Self::as_str, "level")
    }
}

impl FromStr for Priority {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s, &Self::ALL, Self::as_str, "priority")
    }
}

impl FromStr for Status {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s, &Self::ALL, Self::as_str, "status")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completion percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// Rejects values above 100.
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(ShelfError::Validation(format!(
                "progress must be between 0 and 100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Clamps any number into range. Used when decoding stored data.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.round().clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Progress::clamped(raw))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// Metadata about an attached file. The bytes live in external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFile {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    pub url: String,
}

fn default_mime_type() -> String {
    "application/octet-stream".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Link,
    File,
}

pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_category_color")]
    pub color: String,
    pub created_at: DateTime<Utc>,
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    pub fn new(name: String, description: Option<String>, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            color: color.unwrap_or_else(default_category_color),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: Uuid,
    pub user_id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// `File` as soon as anything is attached, `Link` otherwise.
    pub fn source_type(&self) -> SourceType {
        if self.files.is_empty() {
            SourceType::Link
        } else {
            SourceType::File
        }
    }
}

impl AsRef<Resource> for Resource {
    fn as_ref(&self) -> &Resource {
        self
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ResourceHelper::deserialize(deserializer)?;
        let id = helper.id;

        Ok(Resource {
            id,
            user_id: helper.user_id,
            title: helper.title,
            description: helper.description,
            category_id: helper.category_id,
            level: decode_classification(helper.level.as_deref(), id, "level"),
            priority: decode_classification(helper.priority.as_deref(), id, "priority"),
            status: decode_classification(helper.status.as_deref(), id, "status"),
            progress: helper.progress.map(Progress::clamped).unwrap_or_default(),
            links: helper.links,
            files: helper.files,
            is_favorite: helper.is_favorite,
            is_public: helper.is_public,
            created_at: helper.created_at,
            updated_at: helper.updated_at,
        })
    }
}

fn decode_classification<T>(raw: Option<&str>, id: Uuid, field: &str) -> T
where
    T: Classification + FromStr,
{
    match raw {
        None => {
            tracing::warn!(resource = %id, field, "missing field, marking unknown");
            T::UNKNOWN
        }
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(resource = %id, field, value, "unrecognized value, marking unknown");
            T::UNKNOWN
        }),
    }
}

#[derive(Deserialize)]
struct ResourceHelper {
    id: Uuid,
    user_id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category_id: Option<Uuid>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    links: Vec<ResourceLink>,
    #[serde(default)]
    files: Vec<ResourceFile>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}
