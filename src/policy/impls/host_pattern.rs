use std::net::{IpAddr, Ipv4Addr};
use crate::policy::enums::host_pattern::HostPattern;

impl HostPattern {
    /// Parses one allow-list line. Blank lines and `#` comments yield `None`;
    /// anything that is not a recognised pattern is kept as an exact name.
    pub fn parse(line: &str) -> Option<HostPattern> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        if line == "*" {
            return Some(HostPattern::Any);
        }
        if let Some(domain) = line.strip_prefix("*.") {
            if !domain.is_empty() && !domain.contains('*') {
                return Some(HostPattern::Suffix(format!(".{}", domain.to_ascii_lowercase())));
            }
        }
        if let Ok(address) = line.parse::<IpAddr>() {
            return Some(HostPattern::Address(address));
        }
        if let Some(pattern) = Self::parse_network(line).or_else(|| Self::parse_octet_prefix(line)) {
            return Some(pattern);
        }
        Some(HostPattern::Exact(line.to_string()))
    }

    pub fn matches(&self, hostname: &str) -> bool {
        match self {
            HostPattern::Any => true,
            HostPattern::Exact(name) => name == hostname || name.eq_ignore_ascii_case(hostname),
            HostPattern::Suffix(suffix) => {
                hostname.len() > suffix.len() && hostname.to_ascii_lowercase().ends_with(suffix.as_str())
            }
            HostPattern::Address(address) => hostname.parse::<IpAddr>().is_ok_and(|ip| ip == *address),
            HostPattern::Network { address, prefix } => hostname
                .parse::<IpAddr>()
                .is_ok_and(|ip| in_network(ip, *address, *prefix)),
            HostPattern::OctetPrefix(octets) => hostname
                .parse::<Ipv4Addr>()
                .is_ok_and(|ip| ip.octets().starts_with(octets)),
        }
    }

    fn parse_network(line: &str) -> Option<HostPattern> {
        let (address, prefix) = line.split_once('/')?;
        let address = address.parse::<IpAddr>().ok()?;
        let prefix = prefix.parse::<u8>().ok()?;
        let limit = if address.is_ipv4() { 32 } else { 128 };
        if prefix > limit {
            return None;
        }
        Some(HostPattern::Network { address, prefix })
    }

    fn parse_octet_prefix(line: &str) -> Option<HostPattern> {
        let head = line.strip_suffix(".*")?;
        let octets = head
            .split('.')
            .map(|octet| octet.parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        if octets.is_empty() || octets.len() > 3 {
            return None;
        }
        Some(HostPattern::OctetPrefix(octets))
    }
}

fn in_network(ip: IpAddr, network: IpAddr, prefix: u8) -> bool {
    match (ip, network) {
        (IpAddr::V4(ip), IpAddr::V4(network)) => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            u32::from(ip) & mask == u32::from(network) & mask
        }
        (IpAddr::V6(ip), IpAddr::V6(network)) => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            u128::from(ip) & mask == u128::from(network) & mask
        }
        _ => false,
    }
}
