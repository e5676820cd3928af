//! # Command Layer
//!
//! This module contains the **core business logic** of learnshelf. Each
//! command lives in its own submodule and implements plain Rust functions
//! that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Resolve user-facing selectors to resources
//! - Call the [`DataStore`](crate::store::DataStore) and the Filter & Stats engine
//! - Return structured [`CmdResult`] values
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` so they never touch the filesystem.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a resource from a draft
//! - [`get`]: Filtered listing plus library stats
//! - [`view`]: Fetch selected resources
//! - [`update`]: Overwrite a resource with a draft
//! - [`progress`]: Set progress and/or status on selected resources
//! - [`delete`]: Delete resources (and their links/files)
//! - [`stats`]: Library statistics
//! - [`categories`]: List and create categories
//! - [`helpers`]: Shared utilities (selector resolution)

use crate::index::DisplayResource;
use crate::model::{Category, Resource};
use crate::stats::ResourceStats;
use serde::Serialize;

pub mod categories;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod progress;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_resources: Vec<Resource>,
    pub listed_resources: Vec<DisplayResource>,
    pub categories: Vec<Category>,
    pub stats: Option<ResourceStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_resources(mut self, resources: Vec<Resource>) -> Self {
        self.affected_resources = resources;
        self
    }

    pub fn with_listed_resources(mut self, resources: Vec<DisplayResource>) -> Self {
        self.listed_resources = resources;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_stats(mut self, stats: ResourceStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
