/* src/codec.rs */

use std::net::Ipv4Addr;

use crate::addr::ParsedAddr;
use crate::error::{AddrError, Result};

/// Convert dotted-decimal text to its network-order `u32` value.
///
/// ```rust
/// use clientaddr::address_to_integer;
///
/// assert_eq!(address_to_integer("127.0.0.1"), Ok(2130706433));
/// assert!(address_to_integer("::1").is_err());
/// ```
pub fn address_to_integer(text: &str) -> Result<u32> {
    match ParsedAddr::parse(text).to_ipv4() {
        Some(ip) => Ok(pack(ip)),
        None => Err(AddrError::InvalidAddress(text.to_string())),
    }
}

/// Convert a `u32` value back to dotted-decimal text.
///
/// Values above `u32::MAX` fail with [`AddrError::OutOfRange`].
pub fn integer_to_address(value: u64) -> Result<String> {
    integer_to_ip(value).map(|ip| ip.to_string())
}

/// Same as [`address_to_integer`] for an already structured address.
pub fn ip_to_integer(addr: impl Into<ParsedAddr>) -> Result<u32> {
    let addr = addr.into();
    addr.to_ipv4()
        .map(pack)
        .ok_or_else(|| AddrError::InvalidAddress(addr.to_string()))
}

/// Same as [`integer_to_address`], returning the structured address.
pub fn integer_to_ip(value: u64) -> Result<Ipv4Addr> {
    let value = u32::try_from(value).map_err(|_| AddrError::OutOfRange(value))?;
    Ok(unpack(value))
}

// First octet lands in bits 31..24.
fn pack(ip: Ipv4Addr) -> u32 {
    u32::from_be_bytes(ip.octets())
}

fn unpack(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_be_bytes())
}
