//! Integration tests for the HTTP answer gateway against a local mock
//! policy backend.

use assistant_application::ports::answer_gateway::{AnswerGateway, GatewayError};
use assistant_domain::Question;
use assistant_infrastructure::HttpAnswerGateway;
use axum::{Json, Router, http::StatusCode, routing::post};
use std::time::Duration;
use tokio::net::TcpListener;

/// Spawn a mock backend and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn query_round_trip() {
    let router = Router::new().route(
        "/query",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["question"], "What's the vacation policy?");
            Json(serde_json::json!({
                "summary": "15 days/year.",
                "bullets": ["15 days paid vacation", "Manager approval required"],
            }))
        }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::new(&base_url).expect("gateway");
    let payload = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect("answer");

    assert_eq!(payload.summary, "15 days/year.");
    assert_eq!(
        payload.bullets,
        vec!["15 days paid vacation", "Manager approval required"]
    );
}

#[tokio::test]
async fn empty_bullet_list_is_valid() {
    let router = Router::new().route(
        "/query",
        post(|| async {
            Json(serde_json::json!({ "summary": "No further details.", "bullets": [] }))
        }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::new(&base_url).expect("gateway");
    let payload = gateway
        .ask(&Question::new("Is there a dress code?"))
        .await
        .expect("answer");

    assert_eq!(payload.summary, "No further details.");
    assert!(payload.bullets.is_empty());
}

#[tokio::test]
async fn error_status_maps_to_status_failure() {
    let router = Router::new().route(
        "/query",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::new(&base_url).expect("gateway");
    let error = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect_err("expected failure");

    assert!(matches!(error, GatewayError::Status { status: 500 }));
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_body_maps_to_invalid_payload() {
    let router = Router::new().route(
        "/query",
        post(|| async { (StatusCode::OK, "this is not json") }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::new(&base_url).expect("gateway");
    let error = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect_err("expected failure");

    assert!(matches!(error, GatewayError::InvalidPayload(_)));
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn wrong_shape_body_maps_to_invalid_payload() {
    let router = Router::new().route(
        "/query",
        post(|| async { Json(serde_json::json!({ "answer": "wrong field names" })) }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::new(&base_url).expect("gateway");
    let error = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect_err("expected failure");

    assert!(matches!(error, GatewayError::InvalidPayload(_)));
}

#[tokio::test]
async fn connection_refused_maps_to_transport_failure() {
    // Bind a port, note the address, then drop the listener so nothing is
    // listening there when the gateway connects.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let gateway = HttpAnswerGateway::new(format!("http://{addr}")).expect("gateway");
    let error = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect_err("expected failure");

    assert!(matches!(error, GatewayError::Transport(_)));
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn configured_timeout_surfaces_as_transport_failure() {
    let router = Router::new().route(
        "/query",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "summary": "too late", "bullets": [] }))
        }),
    );
    let base_url = spawn_backend(router).await;

    let gateway = HttpAnswerGateway::with_timeout(&base_url, Some(Duration::from_millis(100)))
        .expect("gateway");
    let error = gateway
        .ask(&Question::new("What's the vacation policy?"))
        .await
        .expect_err("expected failure");

    assert!(matches!(error, GatewayError::Transport(_)));
}
