use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

/// Lowest port an endpoint may use. Everything up to 1024 is reserved.
pub const MIN_VALID_PORT: u16 = 1025;

/// Highest port an endpoint may use. 49151 and above are reserved.
pub const MAX_VALID_PORT: u16 = 49150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// The unspecified address of this family (`0.0.0.0` or `::`).
    pub fn unspecified(self) -> IpAddr {
        match self {
            AddressFamily::V4 => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            AddressFamily::V6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "ipv4"),
            AddressFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// An address and port a peer can be reached on.
///
/// The default endpoint is `0.0.0.0:0`, which is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Endpoint {
    addr: IpAddr,
    port: u16,
}

impl Endpoint {
    pub fn new(addr: impl Into<IpAddr>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
        }
    }

    /// An endpoint carrying only an address family, with no concrete address.
    pub fn unspecified(family: AddressFamily, port: u16) -> Self {
        Self::new(family.unspecified(), port)
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.addr)
    }

    pub fn is_loopback(&self) -> bool {
        self.addr.is_loopback()
    }

    /// True if the address is set and the port lies in
    /// `MIN_VALID_PORT..=MAX_VALID_PORT`.
    pub fn is_valid(&self) -> bool {
        !self.addr.is_unspecified() && (MIN_VALID_PORT..=MAX_VALID_PORT).contains(&self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::unspecified(AddressFamily::V4, 0)
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip(), addr.port())
    }
}

impl From<Endpoint> for SocketAddr {
    fn from(endpoint: Endpoint) -> Self {
        SocketAddr::new(endpoint.addr, endpoint.port)
    }
}

impl FromStr for Endpoint {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<SocketAddr>()
            .map(Endpoint::from)
            .map_err(|_| AddressError::InvalidAddress(s.to_string()))
    }
}

impl TryFrom<String> for Endpoint {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SocketAddr::from(*self), f)
    }
}

/// Whether `endpoint` may be used as a transport endpoint.
pub fn is_valid_endpoint(endpoint: &Endpoint) -> bool {
    endpoint.is_valid()
}

/// Private, link-local or unique-local address.
pub fn is_private_network(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            // fc00::/7 unique local, fe80::/10 link local
            (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
        }
    }
}

/// Both endpoints sit on the same private subnet (/24 for IPv4, /64 for IPv6).
pub fn on_same_private_network(a: &Endpoint, b: &Endpoint) -> bool {
    if !is_private_network(&a.addr) || !is_private_network(&b.addr) {
        return false;
    }
    match (a.addr, b.addr) {
        (IpAddr::V4(x), IpAddr::V4(y)) => x.octets()[..3] == y.octets()[..3],
        (IpAddr::V6(x), IpAddr::V6(y)) => x.segments()[..4] == y.segments()[..4],
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_one_one_one(port: u16) -> Endpoint {
        Endpoint::new(Ipv4Addr::new(1, 1, 1, 1), port)
    }

    #[test]
    fn test_port_boundaries() {
        assert!(!is_valid_endpoint(&one_one_one_one(1024)));
        assert!(is_valid_endpoint(&one_one_one_one(1025)));
        assert!(is_valid_endpoint(&one_one_one_one(49150)));
        assert!(!is_valid_endpoint(&one_one_one_one(49151)));
        assert!(!is_valid_endpoint(&one_one_one_one(0)));
        assert!(!is_valid_endpoint(&one_one_one_one(u16::MAX)));
    }

    #[test]
    fn test_unset_address_is_invalid() {
        assert!(!is_valid_endpoint(&Endpoint::default()));
        assert!(!is_valid_endpoint(&Endpoint::unspecified(AddressFamily::V4, 1025)));
        assert!(!is_valid_endpoint(&Endpoint::unspecified(AddressFamily::V6, 1025)));
        assert!(!is_valid_endpoint(&Endpoint::new(Ipv6Addr::UNSPECIFIED, 5000)));
    }

    #[test]
    fn test_ipv6_endpoint_validity() {
        assert!(Endpoint::new(Ipv6Addr::LOCALHOST, 5000).is_valid());
        assert!(!Endpoint::new(Ipv6Addr::LOCALHOST, 80).is_valid());
    }

    #[test]
    fn test_endpoint_parse_and_display() {
        let v4: Endpoint = "1.1.1.1:1025".parse().unwrap();
        assert_eq!(v4, one_one_one_one(1025));
        assert_eq!(v4.to_string(), "1.1.1.1:1025");

        let v6: Endpoint = "[2001:db8::1]:6000".parse().unwrap();
        assert_eq!(v6.family(), AddressFamily::V6);
        assert_eq!(v6.port(), 6000);
        assert_eq!(v6.to_string(), "[2001:db8::1]:6000");

        assert!("Rubbish:1025".parse::<Endpoint>().is_err());
        assert!("256.1.1.1:1025".parse::<Endpoint>().is_err());
        assert!("1.1.1.1".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_endpoint_socket_addr_conversion() {
        let socket: SocketAddr = "10.0.0.5:4000".parse().unwrap();
        let endpoint = Endpoint::from(socket);
        assert_eq!(SocketAddr::from(endpoint), socket);
    }

    #[test]
    fn test_endpoint_serde() {
        let endpoint = one_one_one_one(2000);
        let json = serde_json::to_string(&endpoint).unwrap();
        assert_eq!(json, "\"1.1.1.1:2000\"");
        let decoded: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, endpoint);
        assert!(serde_json::from_str::<Endpoint>("\"nope\"").is_err());
    }

    #[test]
    fn test_private_network_classification() {
        for text in ["10.1.2.3", "172.16.0.1", "192.168.1.1", "169.254.0.7", "fd00::1", "fe80::1"] {
            let addr: IpAddr = text.parse().unwrap();
            assert!(is_private_network(&addr), "{} should be private", text);
        }
        for text in ["1.1.1.1", "172.32.0.1", "2001:db8::1", "::1"] {
            let addr: IpAddr = text.parse().unwrap();
            assert!(!is_private_network(&addr), "{} should be public", text);
        }
    }

    #[test]
    fn test_same_private_network() {
        let a: Endpoint = "192.168.1.10:5000".parse().unwrap();
        let b: Endpoint = "192.168.1.20:6000".parse().unwrap();
        let c: Endpoint = "192.168.2.20:6000".parse().unwrap();
        let d: Endpoint = "8.8.8.8:6000".parse().unwrap();
        assert!(on_same_private_network(&a, &b));
        assert!(!on_same_private_network(&a, &c));
        assert!(!on_same_private_network(&a, &d));

        let e: Endpoint = "[fd00:1:2:3::1]:5000".parse().unwrap();
        let f: Endpoint = "[fd00:1:2:3::2]:5000".parse().unwrap();
        assert!(on_same_private_network(&e, &f));
        assert!(!on_same_private_network(&a, &e));
    }
}
