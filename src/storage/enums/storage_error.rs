use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt entry {}: {reason}", .path.display())]
    Corrupt {
        path: PathBuf,
        reason: String,
    },
}

impl StorageError {
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::CreateDirectory { path, .. }
            | StorageError::Read { path, .. }
            | StorageError::Write { path, .. }
            | StorageError::Remove { path, .. }
            | StorageError::Corrupt { path, .. } => path,
        }
    }
}
