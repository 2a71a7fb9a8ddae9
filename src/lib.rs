/* src/lib.rs */
//! # Client Address Helpers
//!
//! Small, stateless helpers for services running behind reverse proxies:
//! resolving the client IP address from `X-Forwarded-For`, `X-Real-IP` and the
//! connection peer, telling private addresses from public ones, and converting
//! IPv4 addresses to and from their `u32` value.
//!
//! ## Features
//!
//! - First-candidate and first-public-candidate client address resolution
//! - Loopback, link-local and RFC 1918 classification
//! - IPv4 text/structured address to `u32` conversions and back
//! - Optional Axum middleware and extractor integration via the `axum` feature
//!
//! Forwarding headers are set by whoever sends the request. Only trust them
//! when every request passes through a proxy you control.
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use clientaddr::{HeaderMap, client_addr, client_public_addr};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(
//!     "x-forwarded-for".to_string(),
//!     "192.168.5.45, 172.24.9.1, 89.5.6.1".to_string(),
//! );
//!
//! assert_eq!(client_addr(&headers, "101.1.0.4:100"), "192.168.5.45");
//! assert_eq!(client_public_addr(&headers, "101.1.0.4:100"), "89.5.6.1");
//! ```
//!
//! ### Integer Conversion
//!
//! ```rust
//! use clientaddr::{address_to_integer, integer_to_address};
//!
//! assert_eq!(address_to_integer("127.0.0.1"), Ok(2130706433));
//! assert_eq!(integer_to_address(2130706433).as_deref(), Ok("127.0.0.1"));
//! ```

pub mod addr;
pub mod classify;
pub mod codec;
pub mod error;
pub mod extractor;

#[cfg(feature = "axum")]
pub mod middleware;

pub use addr::ParsedAddr;
pub use classify::{is_local, is_local_addr};
pub use codec::{address_to_integer, integer_to_address, integer_to_ip, ip_to_integer};
pub use error::{AddrError, Result};
pub use extractor::{
    ClientAddrResolver, HeaderMap, HeaderSource, Strategy, client_addr, client_public_addr,
    peer_addr, split_host_port,
};

#[cfg(feature = "axum")]
pub use middleware::{ClientAddr, ClientAddrLayer, ClientAddrService};

/// Re-export commonly used types
pub use std::net::{IpAddr, Ipv4Addr};
