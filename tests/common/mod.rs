//! Shared utilities for integration tests.

use std::net::SocketAddr;

use static_responder::{ResponderConfig, ResponderServer, Variant};

/// Start a responder for `variant` on an ephemeral loopback port.
pub async fn spawn_responder(variant: Variant) -> SocketAddr {
    let config = ResponderConfig {
        variant,
        ..Default::default()
    };
    let server = ResponderServer::new(config)
        .bind_to("127.0.0.1:0".parse().unwrap())
        .await
        .expect("bind ephemeral port");
    let addr = server.local_addr().unwrap();

    tokio::spawn(async move {
        server.serve().await.expect("responder serve");
    });

    addr
}

/// A client that neither pools connections nor follows redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
