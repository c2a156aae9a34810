use std::path::PathBuf;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::impls::ssl_layout::CA_CERTIFICATE_NAME;
use crate::storage::structs::certificate_store::CertificateStore;
use crate::storage::structs::file_store::FileStore;

impl CertificateStore {
    pub fn new(files: FileStore, ca_files: FileStore) -> CertificateStore {
        CertificateStore { files, ca_files }
    }

    pub fn has(&self, hostname: &str) -> bool {
        self.files.exists(hostname) && self.ca_files.exists(CA_CERTIFICATE_NAME)
    }

    /// The issued certificate and CA certificate for `hostname`. A host
    /// certificate without a CA certificate next to it is not an issuance.
    pub fn get(&self, hostname: &str) -> Result<Option<(Vec<u8>, Vec<u8>)>, StorageError> {
        let Some(certificate) = self.files.read(hostname)? else {
            return Ok(None);
        };
        let Some(ca_certificate) = self.ca_certificate()? else {
            return Ok(None);
        };
        Ok(Some((certificate, ca_certificate)))
    }

    /// Like [`CertificateStore::get`], decoded as PEM text.
    pub fn get_pem(&self, hostname: &str) -> Result<Option<(String, String)>, StorageError> {
        let Some((certificate, ca_certificate)) = self.get(hostname)? else {
            return Ok(None);
        };
        let certificate = String::from_utf8(certificate).map_err(|_| StorageError::Corrupt {
            path: self.files.path(hostname),
            reason: String::from("certificate is not PEM text"),
        })?;
        let ca_certificate = String::from_utf8(ca_certificate).map_err(|_| StorageError::Corrupt {
            path: self.ca_certificate_path(),
            reason: String::from("CA certificate is not PEM text"),
        })?;
        Ok(Some((certificate, ca_certificate)))
    }

    /// Publishes the CA certificate first (only when absent) so a visible
    /// host certificate always has its CA certificate alongside.
    pub fn store(&self, hostname: &str, certificate: &[u8], ca_certificate: &[u8]) -> Result<(), StorageError> {
        self.ca_files.create(CA_CERTIFICATE_NAME, ca_certificate)?;
        self.files.write(hostname, certificate)
    }

    pub fn ca_certificate(&self) -> Result<Option<Vec<u8>>, StorageError> {
        self.ca_files.read(CA_CERTIFICATE_NAME)
    }

    pub fn ca_certificate_path(&self) -> PathBuf {
        self.ca_files.path(CA_CERTIFICATE_NAME)
    }

    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        self.files.list()
    }
}
