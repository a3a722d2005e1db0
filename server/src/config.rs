//! Listen address resolution.
//!
//! Leptos supplies `site_addr` (from `LEPTOS_SITE_ADDR` or workspace
//! metadata); hosting platforms that only set `PORT` override its port and
//! bind on all interfaces.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ServerError;

/// Resolve the socket to bind.
///
/// # Errors
///
/// Returns [`ServerError::InvalidPort`] when `port` is set but not a `u16`.
pub fn listen_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ServerError> {
    match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => {
            let port: u16 = raw.parse().map_err(|_| ServerError::InvalidPort(raw.to_owned()))?;
            Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
        }
        None => Ok(site_addr),
    }
}
