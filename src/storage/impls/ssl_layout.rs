use std::path::{Path, PathBuf};
use crate::storage::structs::certificate_store::CertificateStore;
use crate::storage::structs::file_store::FileStore;
use crate::storage::structs::key_store::KeyStore;
use crate::storage::structs::request_store::RequestStore;
use crate::storage::structs::ssl_layout::SslLayout;

pub const PUBLIC_KEYS_DIRECTORY: &str = "public_keys";
pub const REQUESTS_DIRECTORY: &str = "requests";
pub const SIGNED_DIRECTORY: &str = "signed";
pub const CA_DIRECTORY: &str = "ca";
pub const CA_CERTIFICATE_NAME: &str = "ca_crt";
pub const CA_KEY_NAME: &str = "ca_key";
pub const PEM_EXTENSION: &str = "pem";

impl SslLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> SslLayout {
        SslLayout { root: root.as_ref().to_path_buf() }
    }

    pub fn public_keys_directory(&self) -> PathBuf {
        self.root.join(PUBLIC_KEYS_DIRECTORY)
    }

    pub fn requests_directory(&self) -> PathBuf {
        self.root.join(REQUESTS_DIRECTORY)
    }

    pub fn signed_directory(&self) -> PathBuf {
        self.root.join(SIGNED_DIRECTORY)
    }

    pub fn ca_directory(&self) -> PathBuf {
        self.root.join(CA_DIRECTORY)
    }

    pub fn ca_certificate_path(&self) -> PathBuf {
        self.ca_files().path(CA_CERTIFICATE_NAME)
    }

    pub fn ca_key_path(&self) -> PathBuf {
        self.ca_key_files().path(CA_KEY_NAME)
    }

    pub fn ca_files(&self) -> FileStore {
        FileStore::new(self.ca_directory(), PEM_EXTENSION)
    }

    /// Same directory as [`SslLayout::ca_files`], written owner-only.
    pub fn ca_key_files(&self) -> FileStore {
        FileStore::private(self.ca_directory(), PEM_EXTENSION)
    }

    pub fn key_store(&self) -> KeyStore {
        KeyStore::new(FileStore::new(self.public_keys_directory(), PEM_EXTENSION))
    }

    pub fn request_store(&self) -> RequestStore {
        RequestStore::new(FileStore::new(self.requests_directory(), PEM_EXTENSION))
    }

    pub fn certificate_store(&self) -> CertificateStore {
        CertificateStore::new(
            FileStore::new(self.signed_directory(), PEM_EXTENSION),
            self.ca_files(),
        )
    }
}
