use super::mem_backend::MemBackend;
use super::resource_store::ResourceStore;

pub type InMemoryStore = ResourceStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ResourceStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::draft::ResourceDraft;
    use crate::model::{Category, Level, Status};
    use crate::session::Session;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub session: Session,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                session: Session::new("fixture-user").unwrap(),
            }
        }

        pub fn with_resources(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = ResourceDraft::new(format!("Test Resource {}", i + 1));
                self.store.create_resource(&self.session, draft).unwrap();
            }
            self
        }

        pub fn with_draft(mut self, draft: ResourceDraft) -> Self {
            self.store.create_resource(&self.session, draft).unwrap();
            self
        }

        pub fn with_resource(self, title: &str, level: Level, status: Status) -> Self {
            let mut draft = ResourceDraft::new(title);
            draft.level = level;
            draft.status = status;
            self.with_draft(draft)
        }

        pub fn with_category(mut self, name: &str) -> Self {
            self.store.create_category(name, None, None).unwrap();
            self
        }

        pub fn category(&self, name: &str) -> Category {
            self.store
                .load_categories()
                .unwrap()
                .into_iter()
                .find(|c| c.name == name)
                .unwrap()
        }
    }
}
