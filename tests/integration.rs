//! Integration tests — validates the registry→healthcheck→secret-read pass
//! end to end against loopback HTTP fixtures.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use toolwatch::integrator::Integrator;
use toolwatch::tools::{ToolDescriptor, ToolRegistry};
use toolwatch::{Config, Error};

/// Helper: serve `router` on a random loopback port, return its address.
async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Helper: a loopback address with nothing listening on it.
async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Helper: a tool whose healthcheck endpoint reports the given status.
async fn tool_reporting(status: &'static str) -> SocketAddr {
    spawn_server(Router::new().route(
        "/healthcheck",
        get(move || async move { Json(serde_json::json!({ "status": status })) }),
    ))
    .await
}

/// Helper: a fake secret store serving `secret/hello` and counting reads.
async fn fake_store() -> (SocketAddr, Arc<AtomicUsize>) {
    let reads = Arc::new(AtomicUsize::new(0));
    let counter = reads.clone();
    let router = Router::new().route(
        "/v1/secret/hello",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(serde_json::json!({
                    "warnings": ["mock store"],
                    "data": { "value": "world" },
                }))
            }
        }),
    );
    (spawn_server(router).await, reads)
}

fn descriptor(name: &str, addr: SocketAddr) -> ToolDescriptor {
    ToolDescriptor {
        name: name.to_string(),
        api_key: format!("{name}-key"),
        base_url: format!("http://{addr}"),
    }
}

fn config_for(store_addr: SocketAddr) -> Config {
    let mut config = Config::default();
    config.secret_store.address = format!("http://{store_addr}");
    config
}

#[tokio::test]
async fn test_all_healthy_reads_secret() {
    let (store_addr, reads) = fake_store().await;
    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_reporting("ok").await));
    registry.add(descriptor("beta", tool_reporting("ok").await));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let secret = integrator.integrate(&registry).await.unwrap();

    assert_eq!(secret.warnings(), ["mock store"]);
    assert_eq!(secret.data["value"], "world");
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_registry_goes_straight_to_read() {
    let (store_addr, reads) = fake_store().await;
    let registry = ToolRegistry::new();

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let secret = integrator.integrate(&registry).await.unwrap();

    assert_eq!(secret.data["value"], "world");
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unhealthy_tool_blamed_and_store_untouched() {
    let (store_addr, reads) = fake_store().await;
    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_reporting("ok").await));
    registry.add(descriptor("beta", tool_reporting("degraded").await));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(
        err,
        Error::ToolUnhealthy { ref tool, ref status } if tool == "beta" && status == "degraded"
    ));
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_first_failure_in_name_order_wins_blame() {
    let (store_addr, _reads) = fake_store().await;
    let mut registry = ToolRegistry::new();
    // Registered out of order; "alpha" must still be blamed first.
    registry.add(descriptor("beta", tool_reporting("degraded").await));
    registry.add(descriptor("alpha", tool_reporting("down").await));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(
        err,
        Error::ToolUnhealthy { ref tool, .. } if tool == "alpha"
    ));
}

#[tokio::test]
async fn test_unreachable_tool_aborts_pass() {
    let (store_addr, reads) = fake_store().await;
    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", unused_addr().await));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(
        err,
        Error::ToolUnreachable { ref tool, .. } if tool == "alpha"
    ));
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_health_body() {
    let (store_addr, _reads) = fake_store().await;
    let tool_addr = spawn_server(Router::new().route(
        "/healthcheck",
        get(|| async { "definitely not json" }),
    ))
    .await;

    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_addr));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidHealthResponse { ref tool, .. } if tool == "alpha"
    ));
}

#[tokio::test]
async fn test_store_failure_surfaces_after_healthy_pass() {
    let store_addr = spawn_server(Router::new().route(
        "/v1/secret/hello",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_reporting("ok").await));

    let integrator = Integrator::new(&config_for(store_addr)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(err, Error::SecretStore { .. }));
}

#[tokio::test]
async fn test_store_down_surfaces_after_healthy_pass() {
    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_reporting("ok").await));

    let integrator = Integrator::new(&config_for(unused_addr().await)).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(err, Error::SecretStore { .. }));
}

#[tokio::test]
async fn test_stalled_tool_hits_request_timeout() {
    let (store_addr, reads) = fake_store().await;
    let tool_addr = spawn_server(Router::new().route(
        "/healthcheck",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(serde_json::json!({ "status": "ok" }))
        }),
    ))
    .await;

    let mut registry = ToolRegistry::new();
    registry.add(descriptor("alpha", tool_addr));

    let mut config = config_for(store_addr);
    config.http.request_timeout = Duration::from_millis(200);

    let integrator = Integrator::new(&config).unwrap();
    let err = integrator.integrate(&registry).await.unwrap_err();

    assert!(matches!(
        err,
        Error::ToolUnreachable { ref tool, .. } if tool == "alpha"
    ));
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}
