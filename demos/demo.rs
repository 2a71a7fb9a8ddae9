/* demos/demo.rs */

use clientaddr::{
    ClientAddrResolver, HeaderMap, Strategy, address_to_integer, client_addr, client_public_addr,
    integer_to_address, is_local_addr, peer_addr,
};

fn main() {
    println!("=== Client Address Examples ===\n");

    // Example 1: First candidate wins
    example_1_first_candidate();

    // Example 2: Walk the chain for a public address
    example_2_first_public();

    // Example 3: Peer address only
    example_3_peer_only();

    // Example 4: Classification
    example_4_classification();

    // Example 5: Integer conversion
    example_5_integer_conversion();

    println!("=== All examples completed! ===");
}

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn example_1_first_candidate() {
    println!("Example 1: First candidate wins");

    let headers = headers(&[
        ("x-forwarded-for", "20.20.20.20, 30.30.30.30"),
        ("x-real-ip", "10.10.10.10"),
    ]);
    println!("Client address: {}", client_addr(&headers, "40.40.40.40:42123"));

    let no_port = client_addr(&HeaderMap::new(), "50.50.50.50");
    println!("Peer without port gives: {:?}", no_port);
    println!();
}

fn example_2_first_public() {
    println!("Example 2: Walk the chain for a public address");

    let chain = headers(&[("x-forwarded-for", "192.168.5.45, 172.24.9.1, 89.5.6.1")]);
    println!("Public address: {}", client_public_addr(&chain, "101.1.0.4:100"));

    let all_local = headers(&[("x-forwarded-for", "192.168.5.45, 172.24.9.1")]);
    println!(
        "All hops local, falls back to peer: {}",
        client_public_addr(&all_local, "101.1.0.4:100")
    );

    let resolver = ClientAddrResolver::new().strategy(Strategy::FirstPublic);
    println!(
        "Everything local: {:?}",
        resolver.resolve(&all_local, "127.0.0.1:42123")
    );
    println!();
}

fn example_3_peer_only() {
    println!("Example 3: Peer address only");

    for peer in ["101.1.0.4:100", "[::1]:8080", "101.1.0.4"] {
        println!("  {:<16} -> {:?}", peer, peer_addr(peer));
    }
    println!();
}

fn example_4_classification() {
    println!("Example 4: Classification");

    for ip in ["127.0.0.1", "::1", "172.15.255.255", "172.16.0.0", "89.5.6.1", "garbage"] {
        println!("  {:<16} local: {}", ip, is_local_addr(ip));
    }
    println!();
}

fn example_5_integer_conversion() {
    println!("Example 5: Integer conversion");

    match address_to_integer("127.0.0.1") {
        Ok(value) => println!("127.0.0.1 -> {}", value),
        Err(e) => println!("Error: {}", e),
    }

    match integer_to_address(3232235777) {
        Ok(text) => println!("3232235777 -> {}", text),
        Err(e) => println!("Error: {}", e),
    }

    if let Err(e) = address_to_integer("::1") {
        println!("::1 -> {}", e);
    }
    if let Err(e) = integer_to_address(u64::MAX) {
        println!("u64::MAX -> {}", e);
    }
    println!();
}
