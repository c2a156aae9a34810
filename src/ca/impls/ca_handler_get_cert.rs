use log::{debug, info};
use crate::ca::enums::ca_error::CaError;
use crate::ca::enums::certificate_response::CertificateResponse;
use crate::ca::structs::ca_handler::CaHandler;
use crate::ca::structs::caller_identity::CallerIdentity;
use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;
use crate::signer::structs::signed_certificate::SignedCertificate;
use crate::signer::traits::signer::Signer;
use crate::stats::enums::stats_event::StatsEvent;

impl CaHandler {
    /// Handles a certificate signing request.
    ///
    /// `caller` is the identity the transport attributes to the request.
    /// `None` marks a request made by this server itself, which is always
    /// signed regardless of the autosign policy.
    #[tracing::instrument(level = "debug", skip(self, request))]
    pub fn get_cert(&self, request: &[u8], caller: Option<&CallerIdentity>) -> Result<CertificateResponse, CaError>
    {
        self.update_stats(StatsEvent::Requests, 1);
        let result = self.process_request(request, caller);
        self.record_outcome(&result);
        result
    }

    fn process_request(&self, request: &[u8], caller: Option<&CallerIdentity>) -> Result<CertificateResponse, CaError>
    {
        let csr = CertificateSigningRequest::parse(request)?;
        let Some(signer) = self.signer.as_deref() else {
            info!("[CA] Host {} asked for signing from a non-CA server", csr.hostname);
            return Ok(CertificateResponse::NotCa);
        };
        self.with_hostname_lock(&csr.hostname, || self.resolve(signer, &csr, caller))
    }

    fn resolve(&self, signer: &dyn Signer, csr: &CertificateSigningRequest, caller: Option<&CallerIdentity>) -> Result<CertificateResponse, CaError>
    {
        let hostname = csr.hostname.as_str();
        if let Some((certificate, ca_certificate)) = self.certificates.get_pem(hostname)? {
            info!("[CA] Retrieving existing certificate for {}", hostname);
            return Ok(CertificateResponse::Issued { certificate, ca_certificate, cached: true });
        }

        self.keys.pin_or_verify(hostname, &csr.public_key)?;

        let authorized = self.policy.evaluate(hostname) || caller.is_none();
        if authorized {
            if caller.is_none() {
                info!("[CA] Signing certificate for CA server");
            }
            let signed = self.sign_and_store(signer, csr)?;
            return Ok(CertificateResponse::Issued {
                certificate: signed.certificate,
                ca_certificate: signed.ca_certificate,
                cached: false,
            });
        }

        if self.requests.store(hostname, csr.pem.as_bytes())? {
            info!("[CA] Storing certificate request for {}", hostname);
        } else {
            info!("[CA] Not replacing existing request from {}", hostname);
            self.update_stats(StatsEvent::DuplicatePending, 1);
        }
        Ok(CertificateResponse::Pending)
    }

    /// Signs `csr` and publishes the result. Nothing is stored when the
    /// signer fails. Must be called with the hostname lock held.
    pub(crate) fn sign_and_store(&self, signer: &dyn Signer, csr: &CertificateSigningRequest) -> Result<SignedCertificate, CaError>
    {
        info!("[CA] Signing certificate for {}", csr.hostname);
        let signed = signer.sign(csr)?;
        self.certificates.store(&csr.hostname, signed.certificate.as_bytes(), signed.ca_certificate.as_bytes())?;
        if self.requests.remove(&csr.hostname)? {
            debug!("[CA] Removed resolved request for {}", csr.hostname);
        }
        Ok(signed)
    }

    fn record_outcome(&self, result: &Result<CertificateResponse, CaError>)
    {
        let event = match result {
            Ok(CertificateResponse::Issued { cached: true, .. }) => StatsEvent::Cached,
            Ok(CertificateResponse::Issued { cached: false, .. }) => StatsEvent::Signed,
            Ok(CertificateResponse::Pending) => StatsEvent::Pending,
            Ok(CertificateResponse::NotCa) => StatsEvent::NotCa,
            Err(CaError::MalformedRequest(_)) | Err(CaError::MissingHostname) => StatsEvent::Malformed,
            Err(CaError::KeyMismatch { .. }) => StatsEvent::KeyMismatches,
            Err(CaError::Signing(_)) => StatsEvent::SigningFailures,
            Err(CaError::Storage(_)) => StatsEvent::StorageFailures,
            Err(_) => return,
        };
        self.update_stats(event, 1);
    }
}
