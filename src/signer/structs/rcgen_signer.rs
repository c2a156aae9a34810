use rcgen::{Issuer, KeyPair};

pub struct RcgenSigner {
    pub(crate) issuer: Issuer<'static, KeyPair>,
    pub ca_certificate: String,
    pub ttl_days: u32,
}
