#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use tempfile::TempDir;
use fleet_ca::ca::structs::ca_handler::CaHandler;
use fleet_ca::ca::structs::caller_identity::CallerIdentity;
use fleet_ca::csr::structs::certificate_signing_request::CertificateSigningRequest;
use fleet_ca::policy::enums::autosign_mode::AutosignMode;
use fleet_ca::policy::structs::autosign_policy::AutosignPolicy;
use fleet_ca::signer::enums::signing_error::SigningError;
use fleet_ca::signer::structs::rcgen_signer::RcgenSigner;
use fleet_ca::signer::structs::signed_certificate::SignedCertificate;
use fleet_ca::signer::traits::signer::Signer;
use fleet_ca::storage::structs::ssl_layout::SslLayout;

pub type TestHandler = Arc<CaHandler>;

/// Real signer that counts how often it was asked to sign.
#[derive(Debug)]
pub struct CountingSigner {
    pub inner: RcgenSigner,
    pub calls: AtomicUsize,
}

impl CountingSigner {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Signer for CountingSigner {
    fn sign(&self, request: &CertificateSigningRequest) -> Result<SignedCertificate, SigningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sign(request)
    }

    fn ca_certificate(&self) -> String {
        self.inner.ca_certificate()
    }
}

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("temporary directory")
}

pub fn create_test_signer(dir: &TempDir) -> Arc<CountingSigner> {
    let layout = SslLayout::new(dir.path());
    let inner = RcgenSigner::initialize(&layout, "Fleet Test CA", 30).expect("test CA");
    Arc::new(CountingSigner { inner, calls: AtomicUsize::new(0) })
}

pub fn create_test_handler(dir: &TempDir, mode: AutosignMode) -> (TestHandler, Arc<CountingSigner>) {
    let signer = create_test_signer(dir);
    let handler = CaHandler::new(
        &SslLayout::new(dir.path()),
        Some(signer.clone() as Arc<dyn Signer>),
        AutosignPolicy::new(mode),
    );
    (Arc::new(handler), signer)
}

pub fn create_test_key() -> KeyPair {
    KeyPair::generate().expect("key pair")
}

pub fn create_test_csr(hostname: &str, key: &KeyPair) -> Vec<u8> {
    let mut params = CertificateParams::new(Vec::<String>::new()).expect("params");
    params.distinguished_name = DistinguishedName::new();
    params.distinguished_name.push(DnType::CommonName, hostname);
    params.serialize_request(key).expect("request").pem().expect("pem").into_bytes()
}

pub fn random_csr(hostname: &str) -> Vec<u8> {
    create_test_csr(hostname, &create_test_key())
}

pub fn remote_caller() -> CallerIdentity {
    CallerIdentity::from("192.0.2.10")
}

pub fn pem_contents(pem: &str) -> Vec<u8> {
    pem::parse(pem.as_bytes()).expect("PEM block").into_contents()
}
