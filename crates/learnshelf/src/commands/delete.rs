use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ResourceSelector;
use crate::session::Session;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    selectors: &[ResourceSelector],
) -> Result<CmdResult> {
    // Resolve everything up front: deleting shifts the indexes of what follows.
    let resolved = resolve_selectors(store, session, selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        store.delete_resource(session, &target.resource.id)?;
        result.add_message(CmdMessage::success(format!(
            "Resource deleted ({}): {}",
            target.index, target.resource.title
        )));
        result.affected_resources.push(target.resource);
    }

    Ok(result)
}
