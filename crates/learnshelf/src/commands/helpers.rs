use crate::error::{Result, ShelfError};
use crate::index::{index_resources, DisplayResource, ResourceSelector};
use crate::session::Session;
use crate::store::DataStore;
use std::collections::HashSet;

pub fn indexed_resources<S: DataStore>(
    store: &S,
    session: &Session,
) -> Result<Vec<DisplayResource>> {
    let resources = store.load_resources(session)?;
    Ok(index_resources(resources))
}

/// Resolves selectors to resources, in selector order, each resource once.
///
/// Fails on the first selector that matches nothing, before anything is
/// changed, so batch commands are all-or-nothing with respect to lookup.
/// A range reaching past the last listed resource is such a failure.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    session: &Session,
    selectors: &[ResourceSelector],
) -> Result<Vec<DisplayResource>> {
    let indexed = indexed_resources(store, session)?;
    let total = indexed.len();
    let missing =
        |i: usize| ShelfError::Api(format!("Index {} not found ({} resources)", i, total));

    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    for selector in selectors {
        let hits: &[DisplayResource] = match *selector {
            ResourceSelector::Index(i) => {
                let pos = i.checked_sub(1).ok_or_else(|| missing(i))?;
                indexed.get(pos..=pos).ok_or_else(|| missing(i))?
            }
            ResourceSelector::Range(start, end) => {
                if end > total {
                    return Err(missing(end));
                }
                let first = start.checked_sub(1).ok_or_else(|| missing(start))?;
                indexed.get(first..end).ok_or_else(|| missing(start))?
            }
            ResourceSelector::Uuid(id) => {
                let pos = indexed
                    .iter()
                    .position(|dr| dr.resource.id == id)
                    .ok_or(ShelfError::NotFound(id))?;
                &indexed[pos..=pos]
            }
        };
        for hit in hits {
            if seen.insert(hit.resource.id) {
                resolved.push(hit.clone());
            }
        }
    }
    Ok(resolved)
}
