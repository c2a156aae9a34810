use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::Mutex;
use crate::policy::structs::autosign_policy::AutosignPolicy;
use crate::signer::traits::signer::Signer;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::certificate_store::CertificateStore;
use crate::storage::structs::key_store::KeyStore;
use crate::storage::structs::request_store::RequestStore;

pub struct CaHandler {
    /// `None` when this server is not a certificate authority.
    pub signer: Option<Arc<dyn Signer>>,
    pub keys: KeyStore,
    pub requests: RequestStore,
    pub certificates: CertificateStore,
    pub policy: AutosignPolicy,
    pub(crate) hostname_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    pub stats: Arc<StatsAtomics>,
}
