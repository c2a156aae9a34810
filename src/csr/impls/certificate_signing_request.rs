use once_cell::sync::Lazy;
use pem::{EncodeConfig, LineEnding, Pem};
use regex::Regex;
use x509_parser::certification_request::X509CertificationRequest;
use x509_parser::prelude::FromDer;
use crate::ca::enums::ca_error::CaError;
use crate::common::common::fingerprint;
use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;

pub const CSR_PEM_TAG: &str = "CERTIFICATE REQUEST";
pub const LEGACY_CSR_PEM_TAG: &str = "NEW CERTIFICATE REQUEST";
pub const PUBLIC_KEY_PEM_TAG: &str = "PUBLIC KEY";
pub const MAX_HOSTNAME_LENGTH: usize = 253;

static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-][A-Za-z0-9._-]*$").expect("hostname pattern is valid")
});

impl CertificateSigningRequest {
    /// Parses a PEM or DER encoded request.
    pub fn parse(data: &[u8]) -> Result<CertificateSigningRequest, CaError> {
        let der = Self::decode(data)?;
        let (remaining, request) = X509CertificationRequest::from_der(&der)
            .map_err(|e| CaError::MalformedRequest(format!("unable to decode request: {e}")))?;
        if !remaining.is_empty() {
            return Err(CaError::MalformedRequest(format!(
                "{} trailing bytes after request", remaining.len()
            )));
        }
        request
            .verify_signature()
            .map_err(|e| CaError::MalformedRequest(format!("request signature does not verify: {e}")))?;

        let hostname = normalize_hostname(&Self::common_name(&request)?);
        validate_hostname(&hostname)?;
        let public_key = request.certification_request_info.subject_pki.raw.to_vec();

        Ok(CertificateSigningRequest {
            hostname,
            public_key,
            pem: encode_pem(CSR_PEM_TAG, &der),
            der,
        })
    }

    pub fn public_key_pem(&self) -> String {
        encode_pem(PUBLIC_KEY_PEM_TAG, &self.public_key)
    }

    pub fn public_key_fingerprint(&self) -> String {
        fingerprint(&self.public_key)
    }

    fn decode(data: &[u8]) -> Result<Vec<u8>, CaError> {
        let start = data.iter().position(|byte| !byte.is_ascii_whitespace());
        let Some(start) = start else {
            return Err(CaError::MalformedRequest(String::from("empty request")));
        };
        if !data[start..].starts_with(b"-----BEGIN") {
            return Ok(data.to_vec());
        }
        let parsed = pem::parse(&data[start..])
            .map_err(|e| CaError::MalformedRequest(format!("invalid PEM: {e}")))?;
        match parsed.tag() {
            CSR_PEM_TAG | LEGACY_CSR_PEM_TAG => Ok(parsed.into_contents()),
            tag => Err(CaError::MalformedRequest(format!("unexpected PEM block '{tag}'"))),
        }
    }

    fn common_name(request: &X509CertificationRequest<'_>) -> Result<String, CaError> {
        let attribute = request
            .certification_request_info
            .subject
            .iter_common_name()
            .next()
            .ok_or(CaError::MissingHostname)?;
        let value = attribute
            .as_str()
            .map_err(|_| CaError::MalformedRequest(String::from("common name is not a string")))?
            .trim();
        if value.is_empty() {
            return Err(CaError::MissingHostname);
        }
        Ok(value.to_string())
    }
}

/// DNS names compare case-insensitively and may carry a root dot, so
/// every spelling of a host maps to the same store entries.
pub fn normalize_hostname(hostname: &str) -> String {
    let hostname = hostname.trim();
    hostname.strip_suffix('.').unwrap_or(hostname).to_ascii_lowercase()
}

/// Hostnames end up as file names in every store, so anything that could
/// escape the store directory is refused.
pub fn validate_hostname(hostname: &str) -> Result<(), CaError> {
    if hostname.is_empty() {
        return Err(CaError::MissingHostname);
    }
    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(CaError::MalformedRequest(format!(
            "hostname exceeds {MAX_HOSTNAME_LENGTH} characters"
        )));
    }
    if hostname.contains("..") || hostname.ends_with('.') || !HOSTNAME_PATTERN.is_match(hostname) {
        return Err(CaError::MalformedRequest(format!("invalid hostname '{hostname}'")));
    }
    Ok(())
}

pub fn encode_pem(tag: &str, contents: &[u8]) -> String {
    pem::encode_config(
        &Pem::new(tag, contents.to_vec()),
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    )
}

/// Decodes the first PEM block of `data` when it carries `tag`.
pub fn decode_pem(tag: &str, data: &[u8]) -> Option<Vec<u8>> {
    let parsed = pem::parse(data).ok()?;
    if parsed.tag() != tag {
        return None;
    }
    Some(parsed.into_contents())
}
