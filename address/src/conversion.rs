use crate::error::{AddressError, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Parse an IPv4 (dotted decimal) or IPv6 (colon hex) address.
///
/// The family is picked from the syntax: anything containing a `:` is read
/// as IPv6, everything else as IPv4. Octets with leading zeros are rejected.
pub fn parse_address(text: &str) -> Result<IpAddr> {
    let parsed = if text.contains(':') {
        text.parse::<Ipv6Addr>().map(IpAddr::V6)
    } else {
        text.parse::<Ipv4Addr>().map(IpAddr::V4)
    };

    parsed.map_err(|_| {
        debug!(input = text, "rejected address text");
        AddressError::InvalidAddress(text.to_string())
    })
}

/// Network-order bytes of an address: 4 for IPv4, 16 for IPv6.
pub fn address_to_bytes(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// Rebuild an address from its network-order bytes.
pub fn address_from_bytes(bytes: &[u8]) -> Result<IpAddr> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Ok(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    debug!(len = bytes.len(), "rejected address bytes");
    Err(AddressError::InvalidLength(bytes.len()))
}

/// Text to binary form, or `None` if `text` is not an address.
pub fn ascii_to_bytes(text: &str) -> Option<Vec<u8>> {
    parse_address(text).ok().map(|addr| address_to_bytes(&addr))
}

/// Binary to canonical text form, or `None` unless `bytes` is 4 or 16 long.
pub fn bytes_to_ascii(bytes: &[u8]) -> Option<String> {
    address_from_bytes(bytes).ok().map(|addr| addr.to_string())
}

/// Dotted-decimal text to its 32-bit network-order value.
///
/// `"121.12.121.1"` maps to `0x790c7901`.
pub fn ascii_to_net(text: &str) -> Result<u32> {
    match parse_address(text)? {
        IpAddr::V4(v4) => Ok(u32::from(v4)),
        IpAddr::V6(_) => Err(AddressError::NotIpv4(text.to_string())),
    }
}

/// 32-bit network-order value to dotted-decimal text.
pub fn net_to_ascii(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}
