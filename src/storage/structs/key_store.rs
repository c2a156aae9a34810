use crate::storage::structs::file_store::FileStore;

#[derive(Debug, Clone)]
pub struct KeyStore {
    pub files: FileStore,
}
