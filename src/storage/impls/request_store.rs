use log::debug;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::file_store::FileStore;
use crate::storage::structs::request_store::RequestStore;

impl RequestStore {
    pub fn new(files: FileStore) -> RequestStore {
        RequestStore { files }
    }

    pub fn has(&self, hostname: &str) -> bool {
        self.files.exists(hostname)
    }

    /// Stores a pending request unless one is already queued. Returns `true`
    /// when this call created the entry.
    pub fn store(&self, hostname: &str, request: &[u8]) -> Result<bool, StorageError> {
        let created = self.files.create(hostname, request)?;
        if !created {
            debug!("[CA] Request for {} already pending, keeping the first one", hostname);
        }
        Ok(created)
    }

    pub fn get(&self, hostname: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.files.read(hostname)
    }

    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        self.files.list()
    }

    pub fn remove(&self, hostname: &str) -> Result<bool, StorageError> {
        self.files.remove(hostname)
    }
}
