use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::info;
use parking_lot::Mutex;
use crate::ca::enums::ca_error::CaError;
use crate::ca::structs::ca_handler::CaHandler;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::policy::enums::autosign_mode::AutosignMode;
use crate::policy::structs::autosign_policy::AutosignPolicy;
use crate::signer::structs::rcgen_signer::RcgenSigner;
use crate::signer::traits::signer::Signer;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::ssl_layout::SslLayout;

impl CaHandler {
    pub fn new(layout: &SslLayout, signer: Option<Arc<dyn Signer>>, policy: AutosignPolicy) -> CaHandler
    {
        let stats = Arc::new(StatsAtomics::default());
        stats.started.store(current_time() as i64, Ordering::SeqCst);
        CaHandler {
            signer,
            keys: layout.key_store(),
            requests: layout.request_store(),
            certificates: layout.certificate_store(),
            policy,
            hostname_locks: Mutex::new(HashMap::new()),
            stats,
        }
    }

    /// Builds the handler described by the configuration, generating the CA
    /// on first start when this server is a certificate authority.
    pub fn from_config(config: &Configuration) -> Result<CaHandler, CaError>
    {
        let layout = SslLayout::new(config.ssl_path());
        let policy = AutosignPolicy::from_setting(&config.ca_config.autosign);
        let signer: Option<Arc<dyn Signer>> = if config.ca_config.enabled {
            let signer = RcgenSigner::initialize(&layout, &config.ca_config.ca_name, config.ca_config.ca_ttl_days)?;
            info!("[CA] Certificate authority loaded from {}", layout.ca_directory().display());
            Some(Arc::new(signer))
        } else {
            info!("[CA] Certificate authority disabled, requests will not be signed");
            None
        };
        Ok(Self::new(&layout, signer, policy))
    }

    /// Builds a handler over an existing CA without generating one. Used by
    /// the operator commands, which must not create a CA as a side effect.
    pub fn from_existing(config: &Configuration) -> Result<CaHandler, CaError>
    {
        let layout = SslLayout::new(config.ssl_path());
        let signer = RcgenSigner::load(&layout, config.ca_config.ca_ttl_days)?;
        Ok(Self::new(&layout, Some(Arc::new(signer)), AutosignPolicy::from_setting(&config.ca_config.autosign)))
    }

    /// A handler that only reads the stores.
    pub fn read_only(config: &Configuration) -> CaHandler
    {
        Self::new(&SslLayout::new(config.ssl_path()), None, AutosignPolicy::new(AutosignMode::Never))
    }

    pub fn is_ca(&self) -> bool {
        self.signer.is_some()
    }

    pub fn ca_certificate(&self) -> Option<String> {
        self.signer.as_ref().map(|signer| signer.ca_certificate())
    }
}

impl fmt::Debug for CaHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaHandler")
            .field("is_ca", &self.is_ca())
            .field("autosign", &self.policy.mode)
            .field("keys", &self.keys.files.directory)
            .field("requests", &self.requests.files.directory)
            .field("certificates", &self.certificates.files.directory)
            .finish_non_exhaustive()
    }
}
