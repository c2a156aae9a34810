#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateResponse {
    NotCa,
    Pending,
    Issued {
        certificate: String,
        ca_certificate: String,
        cached: bool,
    },
}
