use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::file_store::FileStore;

impl FileStore {
    pub fn new<P: AsRef<Path>>(directory: P, extension: &'static str) -> FileStore {
        FileStore {
            directory: directory.as_ref().to_path_buf(),
            extension,
            private: false,
        }
    }

    pub fn private<P: AsRef<Path>>(directory: P, extension: &'static str) -> FileStore {
        FileStore {
            private: true,
            ..FileStore::new(directory, extension)
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.{}", name, self.extension))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        read_optional(&self.path(name))
    }

    /// Publishes `data`, replacing any previous entry.
    pub fn write(&self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path(name);
        let temp = self.stage(&path, data)?;
        temp.persist(&path).map_err(|e| StorageError::Write { path: path.clone(), source: e.error })?;
        sync_directory(&self.directory);
        Ok(())
    }

    /// Publishes `data` only when no entry exists yet. Returns `false` when
    /// another writer got there first; the existing entry is left untouched.
    pub fn create(&self, name: &str, data: &[u8]) -> Result<bool, StorageError> {
        let path = self.path(name);
        if path.exists() {
            return Ok(false);
        }
        let temp = self.stage(&path, data)?;
        match temp.persist_noclobber(&path) {
            Ok(_) => {
                sync_directory(&self.directory);
                Ok(true)
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(StorageError::Write { path, source: e.error }),
        }
    }

    pub fn remove(&self, name: &str) -> Result<bool, StorageError> {
        let path = self.path(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                sync_directory(&self.directory);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Remove { path, source: e }),
        }
    }

    /// Names of all published entries, sorted.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read { path: self.directory.clone(), source: e }),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::Read { path: self.directory.clone(), source: e })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(self.extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if !stem.starts_with('.') {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn stage(&self, path: &Path, data: &[u8]) -> Result<NamedTempFile, StorageError> {
        ensure_directory(&self.directory)?;
        let write_error = |source| StorageError::Write { path: path.to_path_buf(), source };
        let mut temp = NamedTempFile::new_in(&self.directory).map_err(write_error)?;
        temp.write_all(data).map_err(write_error)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if !self.private {
                temp.as_file().set_permissions(fs::Permissions::from_mode(0o644)).map_err(write_error)?;
            }
        }
        temp.as_file().sync_all().map_err(write_error)?;
        Ok(temp)
    }
}

pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
    match fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::Read { path: path.to_path_buf(), source: e }),
    }
}

pub fn ensure_directory(directory: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(directory).map_err(|e| StorageError::CreateDirectory {
        path: directory.to_path_buf(),
        source: e,
    })
}

/// Makes a rename durable. Best effort: not every platform can open a
/// directory for syncing.
fn sync_directory(directory: &Path) {
    #[cfg(unix)]
    {
        if let Ok(handle) = fs::File::open(directory) {
            let _ = handle.sync_all();
        }
    }
    #[cfg(not(unix))]
    let _ = directory;
}
