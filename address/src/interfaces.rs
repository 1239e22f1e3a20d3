//! Local interface enumeration.
//!
//! Every call re-queries the operating system, so addresses that came up or
//! went away since the last call are reflected. Only interfaces flagged up
//! are reported, and loopback addresses are included.

use crate::error::Result;
use std::collections::BTreeSet;
use std::net::IpAddr;
use tracing::{trace, warn};

/// One address bound to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInterface {
    pub name: String,
    pub address: IpAddr,
    pub loopback: bool,
}

/// Query the interface table, propagating OS errors.
pub fn local_interfaces() -> Result<Vec<LocalInterface>> {
    let interfaces = sys::query()?;
    for interface in &interfaces {
        trace!(name = %interface.name, address = %interface.address, "local interface");
    }
    Ok(interfaces)
}

/// All addresses bound to local interfaces. An OS failure yields an empty set.
pub fn local_addresses() -> BTreeSet<IpAddr> {
    match local_interfaces() {
        Ok(interfaces) => interfaces.into_iter().map(|i| i.address).collect(),
        Err(e) => {
            warn!("Failed to enumerate local interfaces: {}", e);
            BTreeSet::new()
        }
    }
}

#[cfg(unix)]
mod sys {
    use super::LocalInterface;
    use std::ffi::CStr;
    use std::io;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::ptr;

    pub(super) fn query() -> io::Result<Vec<LocalInterface>> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();
        // SAFETY: `head` is a valid out-pointer; on success it owns a list
        // that must be released with `freeifaddrs`.
        if unsafe { libc::getifaddrs(&mut head) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut interfaces = Vec::new();
        let mut cursor = head;
        while !cursor.is_null() {
            // SAFETY: `cursor` is a node of the list returned above, which
            // stays alive until `freeifaddrs`.
            let entry = unsafe { &*cursor };
            cursor = entry.ifa_next;

            let flags = entry.ifa_flags;
            if flags & libc::IFF_UP as libc::c_uint == 0 {
                continue;
            }
            // SAFETY: `ifa_addr` is either null or points at a sockaddr
            // whose family tag describes its real layout.
            let Some(address) = (unsafe { sockaddr_to_ip(entry.ifa_addr) }) else {
                continue;
            };
            let name = if entry.ifa_name.is_null() {
                String::new()
            } else {
                // SAFETY: non-null `ifa_name` is a NUL-terminated string.
                unsafe { CStr::from_ptr(entry.ifa_name) }
                    .to_string_lossy()
                    .into_owned()
            };

            interfaces.push(LocalInterface {
                name,
                address,
                loopback: flags & libc::IFF_LOOPBACK as libc::c_uint != 0,
            });
        }

        // SAFETY: `head` came from a successful `getifaddrs` and is freed once.
        unsafe { libc::freeifaddrs(head) };
        Ok(interfaces)
    }

    /// # Safety
    ///
    /// `sa` must be null or point at a sockaddr sized for its family.
    unsafe fn sockaddr_to_ip(sa: *const libc::sockaddr) -> Option<IpAddr> {
        if sa.is_null() {
            return None;
        }
        // SAFETY: caller guarantees `sa` is valid; the cast matches the family.
        unsafe {
            match i32::from((*sa).sa_family) {
                libc::AF_INET => {
                    let sin = &*sa.cast::<libc::sockaddr_in>();
                    Some(IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))))
                }
                libc::AF_INET6 => {
                    let sin6 = &*sa.cast::<libc::sockaddr_in6>();
                    Some(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)))
                }
                _ => None,
            }
        }
    }
}

#[cfg(not(unix))]
mod sys {
    use super::LocalInterface;
    use std::io;

    pub(super) fn query() -> io::Result<Vec<LocalInterface>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "interface enumeration is only implemented for unix targets",
        ))
    }
}
