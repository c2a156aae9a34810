use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;
use crate::signer::enums::signing_error::SigningError;
use crate::signer::structs::signed_certificate::SignedCertificate;

#[cfg_attr(test, mockall::automock)]
pub trait Signer: Send + Sync {
    /// Issues a certificate for the request's hostname and public key.
    fn sign(&self, request: &CertificateSigningRequest) -> Result<SignedCertificate, SigningError>;

    /// PEM encoded CA certificate.
    fn ca_certificate(&self) -> String;
}
