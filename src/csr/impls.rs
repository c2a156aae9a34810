/// CertificateSigningRequest implementation: parsing and validation.
pub mod certificate_signing_request;
