/* demos/axum.rs */

use axum::{Router, extract::ConnectInfo, response::Json, routing::get};
use clientaddr::{ClientAddr, ClientAddrLayer, address_to_integer, is_local_addr};
use serde_json::json;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_app();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    println!("Server starting on http://localhost:3000");
    println!("Test endpoints:");
    println!("  • GET /              - First candidate address");
    println!("  • GET /public        - First public address");
    println!("  • GET /peer          - Connection peer only");
    println!();
    println!("Test with headers:");
    println!("  curl -H 'X-Real-IP: 203.0.113.42' http://localhost:3000/");
    println!("  curl -H 'X-Forwarded-For: 192.168.1.1, 198.51.100.1' http://localhost:3000/public");
    println!();

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

fn create_app() -> Router {
    let default_router = Router::new()
        .route("/", get(addr_handler))
        .layer(ClientAddrLayer::new());

    let public_router = Router::new()
        .route("/", get(addr_handler))
        .layer(ClientAddrLayer::public());

    let peer_router = Router::new()
        .route("/", get(addr_handler))
        .layer(ClientAddrLayer::peer_only());

    default_router
        .nest("/public", public_router)
        .nest("/peer", peer_router)
}

/// Handler that returns the resolved address in JSON format
async fn addr_handler(
    addr: ClientAddr,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Json<serde_json::Value> {
    Json(json!({
        "client_addr": addr.as_str(),
        "found": !addr.is_empty(),
        "is_local": is_local_addr(addr.as_str()),
        "as_integer": address_to_integer(addr.as_str()).ok(),
        "peer": peer.to_string(),
    }))
}
