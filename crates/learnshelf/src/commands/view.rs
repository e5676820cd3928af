use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ResourceSelector;
use crate::session::Session;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(
    store: &S,
    session: &Session,
    selectors: &[ResourceSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, session, selectors)?;
    // Categories ride along so renderers can print names instead of ids.
    Ok(CmdResult::default()
        .with_listed_resources(resolved)
        .with_categories(store.load_categories()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ResourceDraft;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_resource_with_its_category() {
        let fixture = StoreFixture::new().with_category("Systems");
        let systems = fixture.category("Systems");
        let mut draft = ResourceDraft::new("OSTEP");
        draft.category_id = Some(systems.id);
        let fixture = fixture.with_draft(draft);

        let result = run(&fixture.store, &fixture.session, &[ResourceSelector::Index(1)]).unwrap();
        assert_eq!(result.listed_resources.len(), 1);
        assert_eq!(result.listed_resources[0].resource.title, "OSTEP");
        assert_eq!(result.categories, vec![systems]);
    }

    #[test]
    fn view_by_uuid() {
        let fixture = StoreFixture::new().with_resources(2);
        let target = fixture.store.load_resources(&fixture.session).unwrap()[1].clone();

        let result = run(
            &fixture.store,
            &fixture.session,
            &[ResourceSelector::Uuid(target.id)],
        )
        .unwrap();
        assert_eq!(result.listed_resources[0].index, 2);
        assert_eq!(result.listed_resources[0].resource, target);
    }
}
