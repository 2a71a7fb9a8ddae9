/* src/extractor.rs */

use std::collections::HashMap;

use crate::classify::is_local_addr;

/// Proxy header listing the client and each hop, left to right.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Single-value proxy header carrying the original client address.
pub const X_REAL_IP: &str = "x-real-ip";

/// Type alias for the simplest header map: one string value per name.
pub type HeaderMap = HashMap<String, String>;

/// Read-only view over request headers.
///
/// Only the first value of a repeated header is returned. Names are passed
/// in lowercase; implementations should match them case-insensitively.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

fn lookup<'a, V>(map: &'a HashMap<String, V>, name: &str) -> Option<&'a V> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        lookup(self, name).map(String::as_str)
    }
}

impl HeaderSource for HashMap<String, Vec<String>> {
    fn header(&self, name: &str) -> Option<&str> {
        lookup(self, name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Values are read as UTF-8 rather than with `HeaderValue::to_str`, so
/// opaque (non-ASCII) bytes elsewhere in a value do not hide the whole header.
/// Values that are not valid UTF-8 are treated as absent.
#[cfg(feature = "axum")]
impl HeaderSource for axum::http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
    }
}

/// How [`ClientAddrResolver`] picks the client address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// First non-empty candidate, see [`client_addr`].
    #[default]
    FirstCandidate,
    /// First candidate that is not a local address, see [`client_public_addr`].
    FirstPublic,
    /// Ignore headers entirely, see [`peer_addr`].
    PeerOnly,
}

/// Configuration for client address resolution.
#[derive(Debug, Clone, Default)]
pub struct ClientAddrResolver {
    strategy: Strategy,
}

impl ClientAddrResolver {
    /// Create a resolver using [`Strategy::FirstCandidate`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn current_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Resolve the client address. Returns an empty string when nothing usable
    /// was found.
    pub fn resolve<H>(&self, headers: &H, peer: &str) -> String
    where
        H: HeaderSource + ?Sized,
    {
        match self.strategy {
            Strategy::FirstCandidate => client_addr(headers, peer),
            Strategy::FirstPublic => client_public_addr(headers, peer),
            Strategy::PeerOnly => peer_addr(peer),
        }
    }
}

/// Best guess at the client address, without validating it.
///
/// Precedence: the first entry of `X-Forwarded-For`, then `X-Real-IP`, then
/// the host part of `peer` (`host:port`). Values are whitespace-trimmed.
///
/// These headers are client-controlled unless a trusted proxy overwrites them.
///
/// # Examples
///
/// ```rust
/// use clientaddr::{client_addr, HeaderMap};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for".to_string(), "20.20.20.20, 30.30.30.30".to_string());
/// headers.insert("x-real-ip".to_string(), "10.10.10.10".to_string());
///
/// assert_eq!(client_addr(&headers, "40.40.40.40:42123"), "20.20.20.20");
/// ```
pub fn client_addr<H>(headers: &H, peer: &str) -> String
where
    H: HeaderSource + ?Sized,
{
    let forwarded = headers.header(X_FORWARDED_FOR).unwrap_or_default();
    let first = forwarded.split(',').next().unwrap_or_default().trim();
    if !first.is_empty() {
        return first.to_string();
    }

    let real_ip = headers.header(X_REAL_IP).unwrap_or_default().trim();
    if !real_ip.is_empty() {
        return real_ip.to_string();
    }

    peer_addr(peer)
}

/// Like [`client_addr`], but skips every candidate that is a local address.
///
/// Walks the whole `X-Forwarded-For` chain, since proxies inside the private
/// network append their own private addresses. Returns an empty string when
/// all candidates are local.
pub fn client_public_addr<H>(headers: &H, peer: &str) -> String
where
    H: HeaderSource + ?Sized,
{
    let forwarded = headers.header(X_FORWARDED_FOR).unwrap_or_default();
    if let Some(ip) = forwarded
        .split(',')
        .map(str::trim)
        .find(|ip| !ip.is_empty() && !is_local_addr(ip))
    {
        return ip.to_string();
    }

    let real_ip = headers.header(X_REAL_IP).unwrap_or_default().trim();
    if !real_ip.is_empty() && !is_local_addr(real_ip) {
        return real_ip.to_string();
    }

    match split_host_port(peer.trim()) {
        Some((host, _)) if !is_local_addr(host) => host.to_string(),
        _ => String::new(),
    }
}

/// Host part of a `host:port` peer address, or an empty string.
pub fn peer_addr(peer: &str) -> String {
    split_host_port(peer.trim())
        .map(|(host, _)| host.to_string())
        .unwrap_or_default()
}

/// Split `host:port` or `[host]:port` into its parts.
///
/// Returns `None` when there is no port separator, when an unbracketed host
/// contains a colon, or when brackets are misplaced. The port is not checked
/// to be numeric and may be empty.
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let colon = addr.rfind(':')?;
    let port = &addr[colon + 1..];

    let host = if let Some(rest) = addr.strip_prefix('[') {
        let close = rest.find(']')?;
        // "]" must sit immediately before the port separator.
        if close + 1 != colon - 1 {
            return None;
        }
        &rest[..close]
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return None;
        }
        host
    };

    if host.contains(['[', ']']) || port.contains(['[', ']']) {
        return None;
    }
    Some((host, port))
}
