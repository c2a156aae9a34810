use log::{error, info};
use crate::ca::enums::ca_error::CaError;
use crate::common::common::fingerprint;
use crate::csr::impls::certificate_signing_request::{decode_pem, encode_pem, PUBLIC_KEY_PEM_TAG};
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::file_store::FileStore;
use crate::storage::structs::key_store::KeyStore;

impl KeyStore {
    pub fn new(files: FileStore) -> KeyStore {
        KeyStore { files }
    }

    /// DER encoded public key pinned for `hostname`.
    pub fn get(&self, hostname: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let Some(data) = self.files.read(hostname)? else {
            return Ok(None);
        };
        decode_pem(PUBLIC_KEY_PEM_TAG, &data)
            .map(Some)
            .ok_or_else(|| StorageError::Corrupt {
                path: self.files.path(hostname),
                reason: format!("expected a {} PEM block", PUBLIC_KEY_PEM_TAG),
            })
    }

    /// Pins `public_key` for `hostname` on first sight, afterwards only
    /// accepts the identical key. A mismatch never touches storage.
    #[tracing::instrument(level = "debug", skip(self, public_key))]
    pub fn pin_or_verify(&self, hostname: &str, public_key: &[u8]) -> Result<(), CaError> {
        if let Some(pinned) = self.get(hostname)? {
            return Self::verify(hostname, &pinned, public_key);
        }
        let pem = encode_pem(PUBLIC_KEY_PEM_TAG, public_key);
        if self.files.create(hostname, pem.as_bytes())? {
            info!("[KEYSTORE] Pinned public key {} for {}", fingerprint(public_key), hostname);
            return Ok(());
        }
        // Another request pinned a key between the read and the create.
        match self.get(hostname)? {
            Some(pinned) => Self::verify(hostname, &pinned, public_key),
            None => Err(CaError::Storage(StorageError::Corrupt {
                path: self.files.path(hostname),
                reason: String::from("pinned key vanished while pinning"),
            })),
        }
    }

    fn verify(hostname: &str, pinned: &[u8], offered: &[u8]) -> Result<(), CaError> {
        if pinned == offered {
            return Ok(());
        }
        let pinned = fingerprint(pinned);
        let offered = fingerprint(offered);
        error!("[KEYSTORE] Public key mismatch for {}: pinned {} offered {}", hostname, pinned, offered);
        Err(CaError::KeyMismatch {
            hostname: hostname.to_string(),
            pinned,
            offered,
        })
    }
}
