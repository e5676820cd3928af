use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter_resources, FilterSelection};
use crate::index::index_resources;
use crate::session::Session;
use crate::stats::compute_stats;
use crate::store::DataStore;

/// Lists the user's resources narrowed by `selection`.
///
/// Stats always describe the whole library, never the filtered view, and
/// display indexes are assigned before filtering so they stay stable.
pub fn run<S: DataStore>(
    store: &S,
    session: &Session,
    selection: &FilterSelection,
) -> Result<CmdResult> {
    let resources = store.load_resources(session)?;
    let stats = compute_stats(&resources);
    let total = resources.len();

    let listed = filter_resources(index_resources(resources), selection);

    let mut result = CmdResult::default()
        .with_stats(stats)
        .with_categories(store.load_categories()?);

    if let Some(category) = selection.category {
        if !result.categories.iter().any(|c| c.id == category) {
            result.add_message(CmdMessage::warning(format!(
                "No category with id {}",
                category
            )));
        }
    }

    if total == 0 {
        result.add_message(CmdMessage::info("No resources yet."));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No resources match the current filters.",
        ));
    }

    Ok(result.with_listed_resources(listed))
}
