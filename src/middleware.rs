/* src/middleware.rs */

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request},
    http::request::Parts,
    response::Response,
};
use futures_util::future::BoxFuture;
use std::{
    convert::Infallible,
    net::SocketAddr,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::extractor::{ClientAddrResolver, Strategy, peer_addr};

/// Extension that holds the resolved client address.
///
/// The string is empty when no candidate could be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

impl ClientAddr {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Layer that resolves the client address of every request and stores it as
/// a [`ClientAddr`] request extension.
///
/// The peer address comes from `ConnectInfo<SocketAddr>`, so serve the app
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use clientaddr::{ClientAddr, ClientAddrLayer};
///
/// async fn handler(addr: ClientAddr) -> String {
///     addr.0
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .layer(ClientAddrLayer::public());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientAddrLayer {
    resolver: ClientAddrResolver,
}

impl ClientAddrLayer {
    /// Create a layer using the first-candidate strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer with a custom resolver.
    pub fn with_resolver(resolver: ClientAddrResolver) -> Self {
        Self { resolver }
    }

    /// Create a layer that skips local addresses.
    pub fn public() -> Self {
        Self::with_resolver(ClientAddrResolver::new().strategy(Strategy::FirstPublic))
    }

    /// Create a layer that ignores forwarding headers.
    pub fn peer_only() -> Self {
        Self::with_resolver(ClientAddrResolver::new().strategy(Strategy::PeerOnly))
    }
}

impl<S> Layer<S> for ClientAddrLayer {
    type Service = ClientAddrService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientAddrService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Service that resolves client addresses.
#[derive(Debug, Clone)]
pub struct ClientAddrService<S> {
    inner: S,
    resolver: ClientAddrResolver,
}

impl<S> Service<Request> for ClientAddrService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let peer = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|connect_info| connect_info.0.to_string())
            .unwrap_or_default();

        let addr = self.resolver.resolve(req.headers(), &peer);
        tracing::trace!(
            client_addr = %addr,
            peer = %peer,
            strategy = ?self.resolver.current_strategy(),
            "resolved client address"
        );
        req.extensions_mut().insert(ClientAddr(addr));

        let future = self.inner.call(req);
        Box::pin(async move { future.await })
    }
}

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(addr) = parts.extensions.get::<ClientAddr>() {
            return Ok(addr.clone());
        }

        // Without the layer, fall back to the connection peer.
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|connect_info| peer_addr(&connect_info.0.to_string()))
            .unwrap_or_default();
        Ok(ClientAddr(peer))
    }
}
