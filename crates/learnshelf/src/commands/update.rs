use crate::commands::{CmdMessage, CmdResult};
use crate::draft::ResourceDraft;
use crate::error::Result;
use crate::index::{DisplayResource, ResourceSelector};
use crate::session::Session;
use crate::store::DataStore;
use std::slice;

use super::helpers::resolve_selectors;

/// Overwrites the selected resource with `draft`.
pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    selector: ResourceSelector,
    draft: ResourceDraft,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, session, slice::from_ref(&selector))?;
    let mut result = CmdResult::default();

    for target in resolved {
        let updated = store.update_resource(session, &target.resource.id, draft.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Resource updated ({}): {}",
            target.index, updated.title
        )));
        // Index doesn't change after update: ordering is by creation time.
        result.listed_resources.push(DisplayResource {
            index: target.index,
            resource: updated.clone(),
        });
        result.affected_resources.push(updated);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::model::{Priority, Status};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_selected_resource() {
        let mut fixture = StoreFixture::new().with_resources(2);

        let mut draft = ResourceDraft::new("Renamed");
        draft.priority = Priority::High;
        draft.status = Status::Completed;
        let result = run(
            &mut fixture.store,
            &fixture.session,
            ResourceSelector::Index(2),
            draft,
        )
        .unwrap();

        assert_eq!(result.listed_resources[0].index, 2);
        assert!(result.messages[0].content.contains("Renamed"));

        let viewed = view::run(
            &fixture.store,
            &fixture.session,
            &[ResourceSelector::Index(2)],
        )
        .unwrap();
        let resource = &viewed.listed_resources[0].resource;
        assert_eq!(resource.title, "Renamed");
        assert_eq!(resource.priority, Priority::High);
        assert_eq!(resource.status, Status::Completed);
    }

    #[test]
    fn unknown_index_fails() {
        let mut fixture = StoreFixture::new().with_resources(1);
        let result = run(
            &mut fixture.store,
            &fixture.session,
            ResourceSelector::Index(9),
            ResourceDraft::new("Nope"),
        );
        assert!(result.is_err());
    }
}
