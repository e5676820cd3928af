use crate::commands::{CmdMessage, CmdResult};
use crate::draft::ResourceDraft;
use crate::error::{Result, ShelfError};
use crate::index::{DisplayResource, ResourceSelector};
use crate::model::{Progress, Status};
use crate::session::Session;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

/// Sets progress and/or status on the selected resources.
///
/// The two fields are independent: setting one never changes the other.
pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    selectors: &[ResourceSelector],
    progress: Option<Progress>,
    status: Option<Status>,
) -> Result<CmdResult> {
    if progress.is_none() && status.is_none() {
        return Err(ShelfError::Api(
            "Nothing to change: pass a progress value and/or a status".into(),
        ));
    }

    let resolved = resolve_selectors(store, session, selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        let mut draft = ResourceDraft::from_resource(&target.resource);
        if let Some(progress) = progress {
            draft.progress = progress;
        }
        if let Some(status) = status {
            draft.status = status;
        }

        let updated = store.update_resource(session, &target.resource.id, draft)?;
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}, {}",
            updated.title, target.index, updated.status, updated.progress
        )));
        result.listed_resources.push(DisplayResource {
            index: target.index,
            resource: updated.clone(),
        });
        result.affected_resources.push(updated);
    }

    Ok(result)
}
