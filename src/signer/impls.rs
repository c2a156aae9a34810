/// RcgenSigner implementation: loading, bootstrap and signing.
pub mod rcgen_signer;
