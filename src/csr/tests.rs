#[cfg(test)]
mod csr_tests {
    use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair, PublicKeyData};
    use crate::ca::enums::ca_error::CaError;
    use crate::csr::impls::certificate_signing_request::{decode_pem, normalize_hostname, validate_hostname, PUBLIC_KEY_PEM_TAG};
    use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;

    fn request_for(common_name: Option<&str>, key: &KeyPair) -> String {
        let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
        params.distinguished_name = DistinguishedName::new();
        if let Some(name) = common_name {
            params.distinguished_name.push(DnType::CommonName, name.to_string());
        }
        params.serialize_request(key).unwrap().pem().unwrap()
    }

    #[test]
    fn test_parse_pem_request() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("host.test.com"), &key);
        let request = CertificateSigningRequest::parse(pem.as_bytes()).unwrap();
        assert_eq!(request.hostname, "host.test.com");
        assert_eq!(request.public_key, key.subject_public_key_info());
        assert!(request.pem.starts_with("-----BEGIN CERTIFICATE REQUEST-----"));
    }

    #[test]
    fn test_parse_der_request() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("der.test.com"), &key);
        let from_pem = CertificateSigningRequest::parse(pem.as_bytes()).unwrap();
        let from_der = CertificateSigningRequest::parse(&from_pem.der).unwrap();
        assert_eq!(from_pem, from_der);
    }

    #[test]
    fn test_parse_tolerates_leading_whitespace() {
        let key = KeyPair::generate().unwrap();
        let pem = format!("\n\n  {}", request_for(Some("space.test.com"), &key));
        let request = CertificateSigningRequest::parse(pem.as_bytes()).unwrap();
        assert_eq!(request.hostname, "space.test.com");
    }

    #[test]
    fn test_parse_normalizes_hostname() {
        let key = KeyPair::generate().unwrap();
        for name in ["HOST.Test.COM", "host.test.com.", " Host.Test.Com. "] {
            let pem = request_for(Some(name), &key);
            let request = CertificateSigningRequest::parse(pem.as_bytes()).unwrap();
            assert_eq!(request.hostname, "host.test.com");
        }
        let pem = request_for(Some("host.test.com.."), &key);
        assert!(CertificateSigningRequest::parse(pem.as_bytes()).is_err());
    }

    #[test]
    fn test_normalize_hostname() {
        assert_eq!(normalize_hostname("WEB-01.Example.ORG."), "web-01.example.org");
        assert_eq!(normalize_hostname("10.0.0.1"), "10.0.0.1");
        assert_eq!(normalize_hostname("."), "");
    }

    #[test]
    fn test_parse_missing_common_name() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(None, &key);
        let result = CertificateSigningRequest::parse(pem.as_bytes());
        assert!(matches!(result, Err(CaError::MissingHostname)));
    }

    #[test]
    fn test_parse_empty_common_name() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("   "), &key);
        let result = CertificateSigningRequest::parse(pem.as_bytes());
        assert!(matches!(result, Err(CaError::MissingHostname)));
    }

    #[test]
    fn test_parse_rejects_path_in_common_name() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("../../etc/passwd"), &key);
        let result = CertificateSigningRequest::parse(pem.as_bytes());
        assert!(matches!(result, Err(CaError::MalformedRequest(_))));
    }

    #[test]
    fn test_parse_garbage() {
        let result = CertificateSigningRequest::parse(b"definitely not a request");
        assert!(matches!(result, Err(CaError::MalformedRequest(_))));
        let result = CertificateSigningRequest::parse(b"");
        assert!(matches!(result, Err(CaError::MalformedRequest(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_pem_block() {
        let key = KeyPair::generate().unwrap();
        let result = CertificateSigningRequest::parse(key.serialize_pem().as_bytes());
        assert!(matches!(result, Err(CaError::MalformedRequest(_))));
    }

    #[test]
    fn test_parse_rejects_tampered_request() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("tamper.test.com"), &key);
        let mut der = CertificateSigningRequest::parse(pem.as_bytes()).unwrap().der;
        let last = der.len() - 1;
        der[last] ^= 0xff;
        let result = CertificateSigningRequest::parse(&der);
        assert!(matches!(result, Err(CaError::MalformedRequest(_))));
    }

    #[test]
    fn test_public_key_pem_roundtrip() {
        let key = KeyPair::generate().unwrap();
        let pem = request_for(Some("pin.test.com"), &key);
        let request = CertificateSigningRequest::parse(pem.as_bytes()).unwrap();
        let key_pem = request.public_key_pem();
        assert_eq!(decode_pem(PUBLIC_KEY_PEM_TAG, key_pem.as_bytes()).unwrap(), request.public_key);
        assert!(decode_pem("CERTIFICATE", key_pem.as_bytes()).is_none());
    }

    #[test]
    fn test_validate_hostname() {
        assert!(validate_hostname("host.test.com").is_ok());
        assert!(validate_hostname("web-01").is_ok());
        assert!(validate_hostname("10.0.0.1").is_ok());
        assert!(matches!(validate_hostname(""), Err(CaError::MissingHostname)));
        assert!(validate_hostname(".hidden").is_err());
        assert!(validate_hostname("a/b").is_err());
        assert!(validate_hostname("a..b").is_err());
        assert!(validate_hostname("host name").is_err());
        assert!(validate_hostname("host\0name").is_err());
        assert!(validate_hostname(&"a".repeat(254)).is_err());
        assert!(validate_hostname("host.test.com.").is_err());
    }
}
