//! Integration tests for the retrying transport against a live stub server

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use postpilot_client::{ClientError, RetryPolicy, RetryingTransport};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    /// Attempts that fail with 503 before the stub starts answering 200
    failures_before_success: usize,
    terminal_status: StatusCode,
}

async fn stub_handler(State(state): State<StubState>) -> (StatusCode, Json<serde_json::Value>) {
    let attempt = state.hits.fetch_add(1, Ordering::SeqCst);

    if state.terminal_status != StatusCode::OK {
        return (
            state.terminal_status,
            Json(serde_json::json!({"error": "rejected"})),
        );
    }

    if attempt < state.failures_before_success {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"error": "unavailable"})),
        )
    } else {
        (StatusCode::OK, Json(serde_json::json!({"ok": true})))
    }
}

async fn spawn_stub(state: StubState) -> SocketAddr {
    let app = Router::new()
        .route("/api", post(stub_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        retry_delay: Duration::from_millis(5),
    }
}

#[tokio::test]
async fn test_recovers_after_transient_503s() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = spawn_stub(StubState {
        hits: hits.clone(),
        failures_before_success: 2,
        terminal_status: StatusCode::OK,
    })
    .await;

    let transport = RetryingTransport::with_policy(fast_policy());
    let body: serde_json::Value = transport
        .post_json(&format!("http://{}/api", addr), &serde_json::json!({}), None)
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_client_error_fails_without_retry() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = spawn_stub(StubState {
        hits: hits.clone(),
        failures_before_success: 0,
        terminal_status: StatusCode::BAD_REQUEST,
    })
    .await;

    let transport = RetryingTransport::with_policy(fast_policy());
    let result: Result<serde_json::Value, _> = transport
        .post_json(&format!("http://{}/api", addr), &serde_json::json!({}), None)
        .await;

    match result {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 400),
        other => panic!("expected API error, got {:?}", other.map(|_| ())),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_persistent_503_exhausts_retries() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = spawn_stub(StubState {
        hits: hits.clone(),
        failures_before_success: usize::MAX,
        terminal_status: StatusCode::OK,
    })
    .await;

    let transport = RetryingTransport::with_policy(fast_policy());
    let result: Result<serde_json::Value, _> = transport
        .post_json(&format!("http://{}/api", addr), &serde_json::json!({}), None)
        .await;

    match result {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected API error, got {:?}", other.map(|_| ())),
    }
    // Initial attempt plus three retries
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}
