use sha1::{Digest, Sha1};
use crate::common::structs::custom_error::CustomError;

/// Colon separated, upper case SHA-1 fingerprint of `data`, the same notation
/// `openssl x509 -fingerprint` prints.
pub fn fingerprint(data: &[u8]) -> String {
    let digest = Sha1::digest(data);
    hex::encode_upper(digest.as_slice())
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<String>>()
        .join(":")
}

pub fn current_time() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

/// Windows lets a second listener share a port silently, so the bind is
/// tried up front there.
pub fn tcp_check_host_and_port_used(bind_address: &str) -> Result<(), CustomError> {
    if cfg!(target_os = "windows") && std::net::TcpListener::bind(bind_address).is_err() {
        return Err(CustomError::new(&format!("Unable to bind to {bind_address} ! Exiting...")));
    }
    Ok(())
}
