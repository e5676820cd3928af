use super::fs_backend::FsBackend;
use super::resource_store::ResourceStore;
use std::path::PathBuf;

pub type FileStore = ResourceStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        ResourceStore::with_backend(FsBackend::new(data_dir))
    }
}
