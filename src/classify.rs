/* src/classify.rs */

use crate::addr::ParsedAddr;

/// Check whether an address is loopback, link-local or in an RFC 1918 block.
///
/// Covered ranges: `127.0.0.0/8`, `::1`, `10.0.0.0/8`, `172.16.0.0/12`,
/// `169.254.0.0/16` and `192.168.0.0/16`. Other IPv6 addresses and invalid
/// input are never local.
///
/// ```rust
/// use clientaddr::is_local;
/// use std::net::Ipv4Addr;
///
/// assert!(is_local(Ipv4Addr::new(172, 31, 255, 255)));
/// assert!(!is_local(Ipv4Addr::new(172, 32, 0, 0)));
/// ```
pub fn is_local(addr: impl Into<ParsedAddr>) -> bool {
    let addr = addr.into();
    if addr.to_ip().is_some_and(|ip| ip.is_loopback()) {
        return true;
    }

    match addr.to_ipv4().map(|ip| ip.octets()) {
        Some([127, ..]) => true,
        Some([10, ..]) => true,
        Some([172, b, ..]) => (16..=31).contains(&b),
        Some([169, 254, ..]) => true,
        Some([192, 168, ..]) => true,
        _ => false,
    }
}

/// Text form of [`is_local`]; unparseable input is not local.
pub fn is_local_addr(text: &str) -> bool {
    is_local(ParsedAddr::parse(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_local_addr_table() {
        for (ip, expected) in [
            ("", false),
            ("invalid ip address", false),
            ("127.0.0.1", true),
            ("127.255.0.9", true),
            ("::1", true),
            ("182.56.9.18", false),
            ("192.168.9.18", true),
            ("10.168.9.18", true),
            ("11.168.9.18", false),
            ("169.254.3.4", true),
            ("169.253.3.4", false),
            ("2001:db8::1", false),
            ("fe80::1", false),
        ] {
            assert_eq!(is_local_addr(ip), expected, "ip {ip:?}");
        }
    }

    #[test]
    fn test_172_block_bounds() {
        for second in 16..=31u8 {
            assert!(is_local(Ipv4Addr::new(172, second, 9, 18)));
        }
        assert!(is_local_addr("172.16.0.0"));
        assert!(is_local_addr("172.31.255.255"));
        assert!(!is_local_addr("172.15.255.255"));
        assert!(!is_local_addr("172.32.0.0"));
    }

    #[test]
    fn test_10_block_bounds() {
        assert!(is_local_addr("10.0.0.0"));
        assert!(is_local_addr("10.255.255.255"));
        assert!(!is_local_addr("9.255.255.255"));
        assert!(!is_local_addr("11.0.0.0"));
    }

    #[test]
    fn test_169_254_block_bounds() {
        assert!(is_local_addr("169.254.0.0"));
        assert!(is_local_addr("169.254.255.255"));
        assert!(!is_local_addr("169.253.255.255"));
        assert!(!is_local_addr("169.255.0.0"));
    }

    #[test]
    fn test_192_168_block_bounds() {
        assert!(is_local_addr("192.168.0.0"));
        assert!(is_local_addr("192.168.255.255"));
        assert!(!is_local_addr("192.167.255.255"));
        assert!(!is_local_addr("192.169.0.0"));
    }

    #[test]
    fn test_structured_inputs() {
        assert!(is_local(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(is_local([10u8, 0, 0, 1]));
        assert!(!is_local([8u8, 8, 8, 8]));
        assert!(!is_local(ParsedAddr::Invalid));
        assert!(!is_local(None::<IpAddr>));
    }

    #[test]
    fn test_mapped_ipv4_uses_embedded_address() {
        assert!(is_local_addr("::ffff:10.1.2.3"));
        assert!(is_local_addr("::ffff:127.0.0.1"));
        assert!(!is_local_addr("::ffff:8.8.8.8"));
    }
}
