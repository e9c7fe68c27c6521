use super::fs_backend::FsBackend;
use crate::api::TreeStore;
use crate::commands::StoreOptions;
use crate::error::Result;
use std::path::PathBuf;

pub type FileStore = TreeStore<FsBackend>;

impl FileStore {
    /// Open (or create) the store persisted in `data_dir`.
    pub fn open_dir(data_dir: PathBuf) -> Result<Self> {
        TreeStore::open(FsBackend::new(data_dir))
    }

    pub fn open_dir_with(
        data_dir: PathBuf,
        data_file: &str,
        options: StoreOptions,
    ) -> Result<Self> {
        let backend = FsBackend::new(data_dir).with_data_file(data_file);
        TreeStore::open_with_options(backend, options)
    }
}
