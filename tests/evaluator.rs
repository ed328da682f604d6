use std::net::SocketAddr;

use axum::{http::StatusCode, routing::post, Json, Router};
use copyright_server::common::verdict::{RemoteVerdict, VerdictSource};
use serde_json::{json, Value};

async fn spawn_evaluator(is_copyrighted: bool, details: &'static str) -> SocketAddr {
    let app = Router::new().route(
        "/evaluate",
        post(move |Json(_body): Json<Value>| async move {
            Json(json!({ "isCopyrighted": is_copyrighted, "details": details }))
        }),
    );
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn test_remote_evaluator_roundtrip() {
    let addr = spawn_evaluator(true, "fingerprint match").await;
    let source = RemoteVerdict::new(format!("http://{}/", addr));
    let verdict = source
        .evaluate("https://example.com/v/1", "youtube")
        .await
        .unwrap();
    assert!(verdict.is_copyrighted);
    assert_eq!(verdict.details, "fingerprint match");
}

#[tokio::test]
async fn test_remote_evaluator_error_status() {
    let app = Router::new().route(
        "/evaluate",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);

    let source = RemoteVerdict::new(format!("http://{}/", addr));
    let result = source.evaluate("https://example.com/v/1", "youtube").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_remote_evaluator_unreachable() {
    let source = RemoteVerdict::new("http://127.0.0.1:1/".to_string());
    let result = source.evaluate("https://example.com/v/1", "youtube").await;
    assert!(result.is_err());
}
