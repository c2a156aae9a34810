#[cfg(test)]
mod storage_tests {
    use std::fs;
    use crate::ca::enums::ca_error::CaError;
    use crate::storage::enums::storage_error::StorageError;
    use crate::storage::structs::file_store::FileStore;
    use crate::storage::structs::ssl_layout::SslLayout;

    fn layout() -> (tempfile::TempDir, SslLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = SslLayout::new(dir.path());
        (dir, layout)
    }

    #[test]
    fn test_file_store_read_missing() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.requests_directory(), "pem");
        assert!(store.read("host.test.com").unwrap().is_none());
        assert!(!store.exists("host.test.com"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_write_replaces() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.signed_directory(), "pem");
        store.write("host", b"first").unwrap();
        store.write("host", b"second").unwrap();
        assert_eq!(store.read("host").unwrap().unwrap(), b"second");
    }

    #[test]
    fn test_file_store_create_keeps_first() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.requests_directory(), "pem");
        assert!(store.create("host", b"first").unwrap());
        assert!(!store.create("host", b"second").unwrap());
        assert_eq!(store.read("host").unwrap().unwrap(), b"first");
    }

    #[test]
    fn test_file_store_leaves_no_temporary_files() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.requests_directory(), "pem");
        store.create("a", b"a").unwrap();
        store.create("a", b"b").unwrap();
        store.write("b", b"b").unwrap();
        let entries: Vec<_> = fs::read_dir(&store.directory).unwrap().collect();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_file_store_list_sorted_and_filtered() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.requests_directory(), "pem");
        store.create("zeta", b"z").unwrap();
        store.create("alpha", b"a").unwrap();
        fs::write(store.directory.join("notes.txt"), b"ignored").unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn test_file_store_remove() {
        let (_dir, layout) = layout();
        let store = FileStore::new(layout.requests_directory(), "pem");
        store.create("host", b"x").unwrap();
        assert!(store.remove("host").unwrap());
        assert!(!store.remove("host").unwrap());
        assert!(!store.exists("host"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_modes() {
        use std::os::unix::fs::PermissionsExt;
        let (_dir, layout) = layout();
        layout.ca_files().create("ca_crt", b"cert").unwrap();
        layout.ca_key_files().create("ca_key", b"key").unwrap();
        let cert_mode = fs::metadata(layout.ca_certificate_path()).unwrap().permissions().mode();
        let key_mode = fs::metadata(layout.ca_key_path()).unwrap().permissions().mode();
        assert_eq!(cert_mode & 0o777, 0o644);
        assert_eq!(key_mode & 0o777, 0o600);
    }

    #[test]
    fn test_key_store_pins_first_key() {
        let (_dir, layout) = layout();
        let keys = layout.key_store();
        assert!(keys.get("host").unwrap().is_none());
        keys.pin_or_verify("host", b"key-one").unwrap();
        assert_eq!(keys.get("host").unwrap().unwrap(), b"key-one");
        keys.pin_or_verify("host", b"key-one").unwrap();
    }

    #[test]
    fn test_key_store_rejects_different_key() {
        let (_dir, layout) = layout();
        let keys = layout.key_store();
        keys.pin_or_verify("host", b"key-one").unwrap();
        let before = fs::read(keys.files.path("host")).unwrap();
        match keys.pin_or_verify("host", b"key-two") {
            Err(CaError::KeyMismatch { hostname, pinned, offered }) => {
                assert_eq!(hostname, "host");
                assert_ne!(pinned, offered);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(fs::read(keys.files.path("host")).unwrap(), before);
    }

    #[test]
    fn test_key_store_stores_public_key_pem() {
        let (_dir, layout) = layout();
        let keys = layout.key_store();
        keys.pin_or_verify("host", b"key-one").unwrap();
        let stored = fs::read_to_string(layout.public_keys_directory().join("host.pem")).unwrap();
        assert!(stored.starts_with("-----BEGIN PUBLIC KEY-----"));
    }

    #[test]
    fn test_key_store_corrupt_entry() {
        let (_dir, layout) = layout();
        let keys = layout.key_store();
        fs::create_dir_all(layout.public_keys_directory()).unwrap();
        fs::write(keys.files.path("host"), b"garbage").unwrap();
        assert!(matches!(keys.get("host"), Err(StorageError::Corrupt { .. })));
        assert!(matches!(keys.pin_or_verify("host", b"key"), Err(CaError::Storage(_))));
    }

    #[test]
    fn test_key_store_concurrent_pinning() {
        let (_dir, layout) = layout();
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let keys = layout.key_store();
                std::thread::spawn(move || keys.pin_or_verify("host", &[i; 32]).is_ok())
            })
            .collect();
        let accepted = handles.into_iter().map(|h| h.join().unwrap()).filter(|ok| *ok).count();
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_request_store_first_write_wins() {
        let (_dir, layout) = layout();
        let requests = layout.request_store();
        assert!(!requests.has("host"));
        assert!(requests.store("host", b"first").unwrap());
        assert!(!requests.store("host", b"second").unwrap());
        assert!(requests.has("host"));
        assert_eq!(requests.get("host").unwrap().unwrap(), b"first");
        assert_eq!(requests.list().unwrap(), vec!["host".to_string()]);
        assert!(requests.remove("host").unwrap());
        assert!(requests.get("host").unwrap().is_none());
    }

    #[test]
    fn test_certificate_store_roundtrip() {
        let (_dir, layout) = layout();
        let certificates = layout.certificate_store();
        assert!(!certificates.has("host"));
        assert!(certificates.get("host").unwrap().is_none());
        certificates.store("host", b"cert", b"ca").unwrap();
        assert!(certificates.has("host"));
        assert_eq!(certificates.get("host").unwrap().unwrap(), (b"cert".to_vec(), b"ca".to_vec()));
        assert_eq!(certificates.ca_certificate().unwrap().unwrap(), b"ca");
        assert_eq!(certificates.list().unwrap(), vec!["host".to_string()]);
    }

    #[test]
    fn test_certificate_store_keeps_existing_ca_certificate() {
        let (_dir, layout) = layout();
        let certificates = layout.certificate_store();
        certificates.store("one", b"cert-one", b"ca-one").unwrap();
        certificates.store("two", b"cert-two", b"ca-two").unwrap();
        assert_eq!(certificates.get("two").unwrap().unwrap().1, b"ca-one");
    }

    #[test]
    fn test_certificate_store_requires_ca_certificate() {
        let (_dir, layout) = layout();
        let certificates = layout.certificate_store();
        certificates.files.write("host", b"cert").unwrap();
        assert!(!certificates.has("host"));
        assert!(certificates.get("host").unwrap().is_none());
    }

    #[test]
    fn test_layout_paths() {
        let layout = SslLayout::new("/var/lib/fleet-ca/ssl");
        assert_eq!(layout.ca_certificate_path().to_str().unwrap(), "/var/lib/fleet-ca/ssl/ca/ca_crt.pem");
        assert_eq!(layout.ca_key_path().to_str().unwrap(), "/var/lib/fleet-ca/ssl/ca/ca_key.pem");
        assert_eq!(layout.key_store().files.path("h").to_str().unwrap(), "/var/lib/fleet-ca/ssl/public_keys/h.pem");
        assert_eq!(layout.request_store().files.path("h").to_str().unwrap(), "/var/lib/fleet-ca/ssl/requests/h.pem");
        assert_eq!(layout.certificate_store().files.path("h").to_str().unwrap(), "/var/lib/fleet-ca/ssl/signed/h.pem");
    }
}
