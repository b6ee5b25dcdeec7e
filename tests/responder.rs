//! End-to-end tests over real TCP connections.

use static_responder::net::ListenerError;
use static_responder::{ResponderConfig, ResponderServer, ServerError, Variant};

mod common;

#[tokio::test]
async fn each_variant_serves_its_body() {
    let client = common::client();

    for (variant, body) in [
        (Variant::Home, "I HOME !?!!!"),
        (Variant::Rizvan, "Rizvan"),
        (Variant::RizvanLoud, "Rizvan!!!"),
    ] {
        let addr = common::spawn_responder(variant).await;
        let res = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect("responder unreachable");

        assert_eq!(res.status(), 200, "{variant}");
        assert_eq!(res.bytes().await.unwrap().as_ref(), body.as_bytes(), "{variant}");
    }
}

#[tokio::test]
async fn missing_path_is_not_found() {
    let addr = common::spawn_responder(Variant::Home).await;
    let res = common::client()
        .get(format!("http://{addr}/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    assert!(res.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_root_is_rejected() {
    let addr = common::spawn_responder(Variant::Rizvan).await;
    let res = common::client()
        .post(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 405);
    assert_ne!(res.bytes().await.unwrap().as_ref(), b"Rizvan");
}

#[tokio::test]
async fn repeated_gets_are_identical() {
    let addr = common::spawn_responder(Variant::RizvanLoud).await;
    let client = common::client();

    let mut bodies = Vec::new();
    for _ in 0..10 {
        let res = client.get(format!("http://{addr}/")).send().await.unwrap();
        assert_eq!(res.status(), 200);
        bodies.push(res.bytes().await.unwrap());
    }
    assert!(bodies.iter().all(|b| b.as_ref() == b"Rizvan!!!"));
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let addr = common::spawn_responder(Variant::Home).await;
    let client = common::client();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                let res = client.get(format!("http://{addr}/")).send().await.unwrap();
                (res.status().as_u16(), res.text().await.unwrap())
            })
        })
        .collect();

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, "I HOME !?!!!");
    }
}

#[tokio::test]
async fn second_instance_on_same_port_fails_to_bind() {
    let first = ResponderServer::new(ResponderConfig::default())
        .bind_to("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let addr = first.local_addr().unwrap();

    let second = ResponderServer::new(ResponderConfig::default())
        .bind_to(addr)
        .await;

    match second {
        Err(ServerError::Listener(ListenerError::Bind { addr: failed, .. })) => {
            assert_eq!(failed, addr)
        }
        Err(other) => panic!("expected bind error, got {other}"),
        Ok(_) => panic!("second bind on {addr} unexpectedly succeeded"),
    }
}
