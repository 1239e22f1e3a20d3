//! Address utilities for the RUDP transport.
//!
//! Conversions between textual, binary and 32-bit forms of IP addresses,
//! endpoint validation and local interface enumeration. Everything here is
//! synchronous and free of shared state.

pub mod conversion;
pub mod endpoint;
pub mod error;
pub mod interfaces;

pub use conversion::{
    address_from_bytes, address_to_bytes, ascii_to_bytes, ascii_to_net, bytes_to_ascii,
    net_to_ascii, parse_address,
};
pub use endpoint::{
    AddressFamily, Endpoint, MAX_VALID_PORT, MIN_VALID_PORT, is_private_network,
    is_valid_endpoint, on_same_private_network,
};
pub use error::{AddressError, Result};
pub use interfaces::{LocalInterface, local_addresses, local_interfaces};
