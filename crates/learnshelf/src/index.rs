//! # Display Indexes
//!
//! Resources are identified by UUIDs, which nobody wants to type. Lists
//! therefore number resources `1..n` in their canonical order (newest first)
//! and commands accept those numbers back.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `42`)
//! - **Range**: `Start-End` (e.g. `2-5`), start must be ≤ end. Ranges stay
//!   unexpanded until they are resolved against the listed resources, and
//!   reaching past the last one is an error.
//! - **UUID**: a full resource id, for scripts
//!
//! Indexes always refer to the *unfiltered* list, so `3` means the same
//! resource whether or not a filter is active when it is displayed.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::error::{Result, ShelfError};
use crate::model::Resource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResource {
    pub index: usize,
    pub resource: Resource,
}

impl AsRef<Resource> for DisplayResource {
    fn as_ref(&self) -> &Resource {
        &self.resource
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSelector {
    Index(usize),
    /// Inclusive, `start < end`.
    Range(usize, usize),
    Uuid(Uuid),
}

impl fmt::Display for ResourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSelector::Index(i) => write!(f, "{}", i),
            ResourceSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            ResourceSelector::Uuid(id) => write!(f, "{}", id),
        }
    }
}

/// Numbers resources in the order given, starting at 1.
///
/// Callers pass the store's newest-first list; the numbering is only stable
/// as long as that order is.
pub fn index_resources(resources: Vec<Resource>) -> Vec<DisplayResource> {
    resources
        .into_iter()
        .enumerate()
        .map(|(i, resource)| DisplayResource {
            index: i + 1,
            resource,
        })
        .collect()
}

fn parse_index(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(ShelfError::Api("Indexes start at 1".into())),
        Ok(n) => Ok(n),
        Err(_) => Err(ShelfError::Api(format!("Invalid index: {}", s))),
    }
}

/// Parses a single input that may be a UUID, an index or a range.
pub fn parse_index_or_range(s: &str) -> Result<ResourceSelector> {
    let s = s.trim();
    if let Ok(id) = Uuid::parse_str(s) {
        return Ok(ResourceSelector::Uuid(id));
    }

    if let Some((start, end)) = s.split_once('-') {
        if !start.is_empty() {
            let start = parse_index(start)?;
            let end = parse_index(end)?;
            return match start.cmp(&end) {
                Ordering::Less => Ok(ResourceSelector::Range(start, end)),
                Ordering::Equal => Ok(ResourceSelector::Index(start)),
                Ordering::Greater => Err(ShelfError::Api(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ))),
            };
        }
    }

    parse_index(s).map(ResourceSelector::Index)
}

/// Parses many inputs, dropping repeats while preserving first-seen order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ResourceSelector>> {
    let mut seen = HashSet::new();
    let mut selectors = Vec::new();
    for input in inputs {
        let selector = parse_index_or_range(input.as_ref())?;
        if seen.insert(selector) {
            selectors.push(selector);
        }
    }
    if selectors.is_empty() {
        return Err(ShelfError::Api("No resource selected".into()));
    }
    Ok(selectors)
}
