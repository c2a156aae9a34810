use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// `*`
    Any,
    Exact(String),
    /// `*.example.com`, stored lowercased with the leading dot.
    Suffix(String),
    Address(IpAddr),
    Network { address: IpAddr, prefix: u8 },
    /// `192.168.1.*`
    OctetPrefix(Vec<u8>),
}
