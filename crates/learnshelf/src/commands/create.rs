use crate::commands::{CmdMessage, CmdResult};
use crate::draft::ResourceDraft;
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    draft: ResourceDraft,
) -> Result<CmdResult> {
    let resource = store.create_resource(session, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Resource created: {}",
        resource.title
    )));
    result.affected_resources.push(resource);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::filter::FilterSelection;
    use crate::model::{Level, Status};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_resource_with_defaults() {
        let mut store = InMemoryStore::new();
        let session = Session::new("alice").unwrap();

        let result = run(&mut store, &session, ResourceDraft::new("Rustlings")).unwrap();
        assert_eq!(result.affected_resources.len(), 1);
        assert_eq!(result.messages.len(), 1);

        let created = &result.affected_resources[0];
        assert_eq!(created.level, Level::Beginner);
        assert_eq!(created.status, Status::NotStarted);

        let listed = get::run(&store, &session, &FilterSelection::default()).unwrap();
        assert_eq!(listed.listed_resources.len(), 1);
        assert_eq!(listed.listed_resources[0].index, 1);
    }

    #[test]
    fn invalid_draft_creates_nothing() {
        let mut store = InMemoryStore::new();
        let session = Session::new("alice").unwrap();

        assert!(run(&mut store, &session, ResourceDraft::new("")).is_err());
        assert!(store.load_resources(&session).unwrap().is_empty());
    }
}
