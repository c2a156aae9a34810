use crate::storage::structs::file_store::FileStore;

#[derive(Debug, Clone)]
pub struct RequestStore {
    pub files: FileStore,
}
