use crate::storage::structs::file_store::FileStore;

#[derive(Debug, Clone)]
pub struct CertificateStore {
    pub files: FileStore,
    pub ca_files: FileStore,
}
