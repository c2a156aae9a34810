/// Signs validated requests on behalf of the CA.
pub mod signer;
