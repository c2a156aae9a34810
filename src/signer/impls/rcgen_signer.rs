use std::fmt;
use std::net::IpAddr;
use log::{info, warn};
use rand::RngExt;
use rcgen::string::Ia5String;
use rcgen::{
    BasicConstraints, CertificateParams, CertificateSigningRequestParams, DistinguishedName, DnType,
    ExtendedKeyUsagePurpose, IsCa, Issuer, KeyPair, KeyUsagePurpose, SanType, SerialNumber,
};
use time::{Duration, OffsetDateTime};
use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;
use crate::signer::enums::signing_error::SigningError;
use crate::signer::structs::rcgen_signer::RcgenSigner;
use crate::signer::structs::signed_certificate::SignedCertificate;
use crate::signer::traits::signer::Signer;
use crate::storage::impls::ssl_layout::{CA_CERTIFICATE_NAME, CA_KEY_NAME};
use crate::storage::structs::ssl_layout::SslLayout;

/// Certificates are back-dated so hosts with a slightly slow clock accept them.
const BACKDATE_DAYS: i64 = 1;

impl RcgenSigner {
    /// Loads the CA certificate and key from `layout`.
    pub fn load(layout: &SslLayout, ttl_days: u32) -> Result<RcgenSigner, SigningError> {
        let key_pem = layout
            .ca_key_files()
            .read(CA_KEY_NAME)?
            .ok_or_else(|| SigningError::KeyFileNotFound(layout.ca_key_path().display().to_string()))?;
        let certificate_pem = layout
            .ca_files()
            .read(CA_CERTIFICATE_NAME)?
            .ok_or_else(|| SigningError::CertFileNotFound(layout.ca_certificate_path().display().to_string()))?;
        let key_pem = String::from_utf8(key_pem).map_err(|e| SigningError::KeyParseError(e.to_string()))?;
        let certificate_pem = String::from_utf8(certificate_pem).map_err(|e| SigningError::CertParseError(e.to_string()))?;
        Self::from_pem(&certificate_pem, &key_pem, ttl_days)
    }

    pub fn from_pem(certificate_pem: &str, key_pem: &str, ttl_days: u32) -> Result<RcgenSigner, SigningError> {
        let key_pair = KeyPair::from_pem(key_pem).map_err(|e| SigningError::KeyParseError(e.to_string()))?;
        let issuer = Issuer::from_ca_cert_pem(certificate_pem, key_pair)
            .map_err(|e| SigningError::CertParseError(e.to_string()))?;
        Ok(RcgenSigner {
            issuer,
            ca_certificate: certificate_pem.to_string(),
            ttl_days,
        })
    }

    /// Generates a self-signed CA and returns `(certificate_pem, key_pem)`.
    pub fn generate_ca(ca_name: &str, ttl_days: u32) -> Result<(String, String), SigningError> {
        let key_pair = KeyPair::generate().map_err(|e| SigningError::GenerateError(e.to_string()))?;
        let certificate_pem = Self::self_signed_ca(ca_name, ttl_days, &key_pair)?;
        Ok((certificate_pem, key_pair.serialize_pem()))
    }

    /// Builds the self-signed CA certificate for an existing key.
    pub fn self_signed_ca(ca_name: &str, ttl_days: u32, key_pair: &KeyPair) -> Result<String, SigningError> {
        let mut params = CertificateParams::new(Vec::<String>::new())
            .map_err(|e| SigningError::GenerateError(e.to_string()))?;
        params.distinguished_name = DistinguishedName::new();
        params.distinguished_name.push(DnType::CommonName, ca_name);
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.key_usages = vec![
            KeyUsagePurpose::KeyCertSign,
            KeyUsagePurpose::CrlSign,
            KeyUsagePurpose::DigitalSignature,
        ];
        let (not_before, not_after) = validity(ttl_days);
        params.not_before = not_before;
        params.not_after = not_after;
        params.serial_number = Some(random_serial());
        let certificate = params
            .self_signed(key_pair)
            .map_err(|e| SigningError::GenerateError(e.to_string()))?;
        Ok(certificate.pem())
    }

    /// Writes a new CA into `layout` unless one exists. Returns `true` when
    /// a certificate was written. A key left without its certificate by an
    /// interrupted run gets a fresh certificate; a certificate without its
    /// key is reported as an error.
    pub fn generate_files(layout: &SslLayout, ca_name: &str, ttl_days: u32) -> Result<bool, SigningError> {
        let key_files = layout.ca_key_files();
        let ca_files = layout.ca_files();
        match (key_files.exists(CA_KEY_NAME), ca_files.exists(CA_CERTIFICATE_NAME)) {
            (true, true) => return Ok(false),
            (true, false) => return Self::complete_ca(layout, ca_name, ttl_days),
            (false, true) => {
                return Err(SigningError::KeyFileNotFound(layout.ca_key_path().display().to_string()));
            }
            (false, false) => {}
        }

        info!("[CERTGEN] Generating CA '{}' valid for {} days", ca_name, ttl_days);
        let (certificate_pem, key_pem) = Self::generate_ca(ca_name, ttl_days)?;
        if !key_files.create(CA_KEY_NAME, key_pem.as_bytes())? {
            warn!("[CERTGEN] {} appeared while generating, keeping it", layout.ca_key_path().display());
            return Ok(false);
        }
        ca_files.create(CA_CERTIFICATE_NAME, certificate_pem.as_bytes())?;
        info!(
            "[CERTGEN] The files {} and {} have been generated",
            layout.ca_key_path().display(),
            layout.ca_certificate_path().display()
        );
        Ok(true)
    }

    fn complete_ca(layout: &SslLayout, ca_name: &str, ttl_days: u32) -> Result<bool, SigningError> {
        let key_pem = layout
            .ca_key_files()
            .read(CA_KEY_NAME)?
            .ok_or_else(|| SigningError::KeyFileNotFound(layout.ca_key_path().display().to_string()))?;
        let key_pem = String::from_utf8(key_pem).map_err(|e| SigningError::KeyParseError(e.to_string()))?;
        let key_pair = KeyPair::from_pem(&key_pem).map_err(|e| SigningError::KeyParseError(e.to_string()))?;
        warn!(
            "[CERTGEN] {} has no certificate, issuing a new one for the existing key",
            layout.ca_key_path().display()
        );
        let certificate_pem = Self::self_signed_ca(ca_name, ttl_days, &key_pair)?;
        if !layout.ca_files().create(CA_CERTIFICATE_NAME, certificate_pem.as_bytes())? {
            return Ok(false);
        }
        info!("[CERTGEN] The file {} has been generated", layout.ca_certificate_path().display());
        Ok(true)
    }

    /// Generates the CA when missing, then loads it.
    pub fn initialize(layout: &SslLayout, ca_name: &str, ttl_days: u32) -> Result<RcgenSigner, SigningError> {
        Self::generate_files(layout, ca_name, ttl_days)?;
        Self::load(layout, ttl_days)
    }
}

impl Signer for RcgenSigner {
    #[tracing::instrument(level = "debug", skip(self, request), fields(hostname = %request.hostname))]
    fn sign(&self, request: &CertificateSigningRequest) -> Result<SignedCertificate, SigningError> {
        let mut csr = CertificateSigningRequestParams::from_pem(&request.pem)
            .map_err(|e| SigningError::RequestParseError(e.to_string()))?;

        let params = &mut csr.params;
        params.distinguished_name = DistinguishedName::new();
        params.distinguished_name.push(DnType::CommonName, request.hostname.as_str());
        params.subject_alt_names = vec![subject_alt_name(&request.hostname)?];
        params.is_ca = IsCa::NoCa;
        params.key_usages = vec![
            KeyUsagePurpose::DigitalSignature,
            KeyUsagePurpose::KeyEncipherment,
        ];
        params.extended_key_usages = vec![
            ExtendedKeyUsagePurpose::ServerAuth,
            ExtendedKeyUsagePurpose::ClientAuth,
        ];
        let (not_before, not_after) = validity(self.ttl_days);
        params.not_before = not_before;
        params.not_after = not_after;
        params.serial_number = Some(random_serial());
        params.use_authority_key_identifier_extension = true;

        let certificate = csr
            .signed_by(&self.issuer)
            .map_err(|e| SigningError::SignError(e.to_string()))?;
        Ok(SignedCertificate {
            certificate: certificate.pem(),
            ca_certificate: self.ca_certificate.clone(),
        })
    }

    fn ca_certificate(&self) -> String {
        self.ca_certificate.clone()
    }
}

impl fmt::Debug for RcgenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RcgenSigner")
            .field("ttl_days", &self.ttl_days)
            .finish_non_exhaustive()
    }
}

fn validity(ttl_days: u32) -> (OffsetDateTime, OffsetDateTime) {
    let now = OffsetDateTime::now_utc();
    (now - Duration::days(BACKDATE_DAYS), now + Duration::days(i64::from(ttl_days)))
}

/// 128 random bits with the top bit cleared, keeping the DER integer positive.
fn random_serial() -> SerialNumber {
    let mut rng = rand::rng();
    let mut bytes: [u8; 16] = rng.random();
    bytes[0] &= 0x7f;
    SerialNumber::from(bytes.to_vec())
}

fn subject_alt_name(hostname: &str) -> Result<SanType, SigningError> {
    if let Ok(address) = hostname.parse::<IpAddr>() {
        return Ok(SanType::IpAddress(address));
    }
    Ia5String::try_from(hostname.to_string())
        .map(SanType::DnsName)
        .map_err(|e| SigningError::SignError(format!("invalid DNS name '{}': {}", hostname, e)))
}
