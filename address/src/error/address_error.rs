use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("Invalid address length: {0} bytes (expected 4 or 16)")]
    InvalidLength(usize),

    #[error("Not an IPv4 address: {0:?}")]
    NotIpv4(String),

    #[error("Interface query failed: {0}")]
    InterfaceQuery(#[from] std::io::Error),
}
