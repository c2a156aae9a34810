use log::{info, warn};
use crate::ca::enums::ca_error::CaError;
use crate::ca::structs::ca_handler::CaHandler;
use crate::csr::impls::certificate_signing_request::{normalize_hostname, validate_hostname};
use crate::csr::structs::certificate_signing_request::CertificateSigningRequest;
use crate::signer::structs::signed_certificate::SignedCertificate;
use crate::stats::enums::stats_event::StatsEvent;

impl CaHandler {
    /// Hostnames with a queued request and no issued certificate, sorted.
    pub fn list_pending(&self) -> Result<Vec<String>, CaError>
    {
        Ok(self
            .requests
            .list()?
            .into_iter()
            .filter(|hostname| !self.certificates.has(hostname))
            .collect())
    }

    /// Signs the queued request for `hostname`. A host that was issued in
    /// the meantime gets its stored certificate back and the request dropped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sign(&self, hostname: &str) -> Result<SignedCertificate, CaError>
    {
        let hostname = normalize_hostname(hostname);
        let hostname = hostname.as_str();
        validate_hostname(hostname)?;
        let signer = self.signer.as_deref().ok_or(CaError::NotCa)?;
        self.with_hostname_lock(hostname, || {
            if let Some((certificate, ca_certificate)) = self.certificates.get_pem(hostname)? {
                self.requests.remove(hostname)?;
                info!("[CA] {} is already signed, dropped its pending request", hostname);
                return Ok(SignedCertificate { certificate, ca_certificate });
            }

            let request = self
                .requests
                .get(hostname)?
                .ok_or_else(|| CaError::NoPendingRequest(hostname.to_string()))?;
            let csr = CertificateSigningRequest::parse(&request)?;
            if csr.hostname != hostname {
                return Err(CaError::MalformedRequest(format!(
                    "queued request for {} names {}", hostname, csr.hostname
                )));
            }
            self.keys.pin_or_verify(hostname, &csr.public_key)?;
            let signed = self.sign_and_store(signer, &csr)?;
            self.update_stats(StatsEvent::ManualSigned, 1);
            Ok(signed)
        })
    }

    /// Signs every pending request. Failures are reported per hostname and
    /// do not stop the remaining ones.
    pub fn sign_all(&self) -> Result<Vec<(String, Result<SignedCertificate, CaError>)>, CaError>
    {
        let pending = self.list_pending()?;
        if pending.is_empty() {
            info!("[CA] No pending certificate requests");
        }
        Ok(pending
            .into_iter()
            .map(|hostname| {
                let result = self.sign(&hostname);
                if let Err(e) = &result {
                    warn!("[CA] Unable to sign {}: {}", hostname, e);
                }
                (hostname, result)
            })
            .collect())
    }
}
