use crate::ca::enums::certificate_response::CertificateResponse;

impl CertificateResponse {
    /// The `(certificate, ca_certificate)` pair of the RPC surface; both are
    /// empty when nothing was issued.
    pub fn to_pair(&self) -> (String, String) {
        match self {
            CertificateResponse::Issued { certificate, ca_certificate, .. } => {
                (certificate.clone(), ca_certificate.clone())
            }
            CertificateResponse::NotCa | CertificateResponse::Pending => (String::new(), String::new()),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            CertificateResponse::NotCa => "not_ca",
            CertificateResponse::Pending => "pending",
            CertificateResponse::Issued { cached: true, .. } => "cached",
            CertificateResponse::Issued { cached: false, .. } => "signed",
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, CertificateResponse::Issued { .. })
    }
}
