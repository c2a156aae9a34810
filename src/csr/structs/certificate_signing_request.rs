#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSigningRequest {
    /// Subject common name, used as the identity of the enrolling host.
    pub hostname: String,
    /// DER encoded SubjectPublicKeyInfo.
    pub public_key: Vec<u8>,
    pub der: Vec<u8>,
    /// The request re-encoded as a PEM `CERTIFICATE REQUEST` block.
    pub pem: String,
}
