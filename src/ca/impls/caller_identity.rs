use std::fmt;
use std::net::IpAddr;
use crate::ca::structs::caller_identity::CallerIdentity;

impl From<&str> for CallerIdentity {
    fn from(value: &str) -> Self {
        CallerIdentity(value.to_string())
    }
}

impl From<IpAddr> for CallerIdentity {
    fn from(value: IpAddr) -> Self {
        CallerIdentity(value.to_string())
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
