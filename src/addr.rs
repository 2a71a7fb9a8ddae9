/* src/addr.rs */

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A parsed address: four IPv4 octets, sixteen IPv6 octets, or nothing usable.
///
/// Both the classifier and the integer codec start from this value, so text
/// input is parsed in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedAddr {
    /// IPv4 octets, most significant first.
    V4([u8; 4]),
    /// IPv6 octets, most significant first.
    V6([u8; 16]),
    /// Input that is not an IP address.
    Invalid,
}

impl ParsedAddr {
    /// Parse dotted-decimal or colon-hex text. Surrounding whitespace is not
    /// stripped; anything that is not an address yields `Invalid`.
    pub fn parse(text: &str) -> Self {
        text.parse::<IpAddr>().map_or(Self::Invalid, Self::from)
    }

    /// Whether the input parsed as an IPv4 or IPv6 address.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// The IPv4 form of this address, if it has one.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) yield their embedded
    /// IPv4 address.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        match *self {
            Self::V4(octets) => Some(Ipv4Addr::from(octets)),
            Self::V6(octets) => Ipv6Addr::from(octets).to_ipv4_mapped(),
            Self::Invalid => None,
        }
    }

    pub fn to_ip(&self) -> Option<IpAddr> {
        match *self {
            Self::V4(octets) => Some(IpAddr::V4(octets.into())),
            Self::V6(octets) => Some(IpAddr::V6(octets.into())),
            Self::Invalid => None,
        }
    }
}

impl From<IpAddr> for ParsedAddr {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Ipv4Addr> for ParsedAddr {
    fn from(ip: Ipv4Addr) -> Self {
        Self::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for ParsedAddr {
    fn from(ip: Ipv6Addr) -> Self {
        Self::V6(ip.octets())
    }
}

impl From<[u8; 4]> for ParsedAddr {
    fn from(octets: [u8; 4]) -> Self {
        Self::V4(octets)
    }
}

impl From<[u8; 16]> for ParsedAddr {
    fn from(octets: [u8; 16]) -> Self {
        Self::V6(octets)
    }
}

impl From<Option<IpAddr>> for ParsedAddr {
    fn from(ip: Option<IpAddr>) -> Self {
        ip.map_or(Self::Invalid, Self::from)
    }
}

impl fmt::Display for ParsedAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ip() {
            Some(ip) => fmt::Display::fmt(&ip, f),
            None => f.write_str("invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(ParsedAddr::parse("127.0.0.1"), ParsedAddr::V4([127, 0, 0, 1]));
        assert_eq!(
            ParsedAddr::parse("::1"),
            ParsedAddr::V6(Ipv6Addr::LOCALHOST.octets())
        );
        assert_eq!(ParsedAddr::parse(""), ParsedAddr::Invalid);
        assert_eq!(ParsedAddr::parse("invalid ip address"), ParsedAddr::Invalid);
        assert_eq!(ParsedAddr::parse(" 10.0.0.1"), ParsedAddr::Invalid);
        assert_eq!(ParsedAddr::parse("256.0.0.1"), ParsedAddr::Invalid);
    }

    #[test]
    fn test_is_valid() {
        assert!(ParsedAddr::parse("192.168.1.1").is_valid());
        assert!(ParsedAddr::parse("::1").is_valid());
        assert!(ParsedAddr::from([0u8; 16]).is_valid());
        assert!(!ParsedAddr::parse("").is_valid());
        assert!(!ParsedAddr::parse("invalid ip address").is_valid());
        assert!(!ParsedAddr::from(None::<IpAddr>).is_valid());
    }

    #[test]
    fn test_to_ipv4_unwraps_mapped() {
        let mapped = ParsedAddr::parse("::ffff:192.168.1.1");
        assert!(matches!(mapped, ParsedAddr::V6(_)));
        assert_eq!(mapped.to_ipv4(), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(ParsedAddr::parse("2001:db8::1").to_ipv4(), None);
        assert_eq!(ParsedAddr::Invalid.to_ipv4(), None);
    }

    #[test]
    fn test_display_matches_input() {
        for text in ["10.20.30.40", "0.0.0.0", "::1", "2001:db8::8a2e:370:7334"] {
            assert_eq!(ParsedAddr::parse(text).to_string(), text);
        }
        assert_eq!(ParsedAddr::Invalid.to_string(), "invalid");
    }
}
