mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::TestHarness;
use serde_json::json;
use telemetry_analyzer::Config;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_banner() {
    let harness = TestHarness::new().await;
    let (status, body) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Telemetry analysis endpoint is running. Please POST to /analyze"})
    );
}

#[tokio::test]
async fn test_health_reports_dataset() {
    let harness = TestHarness::new().await;
    let (status, body) = harness.get("/health?check=dataset").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "telemetry-analyzer");
    assert_eq!(body["checks"]["dataset"]["details"]["records"], 36);
}

#[tokio::test]
async fn test_openapi_document() {
    let harness = TestHarness::new().await;
    let (status, body) = harness.get("/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/analyze"]["post"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let harness = TestHarness::new().await;
    let (status, _) = harness.get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_for_analyze() {
    let harness = TestHarness::new().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let response = harness.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://example.org");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-custom"
    );
}

#[tokio::test]
async fn test_cors_on_analyze_response() {
    let harness = TestHarness::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .header(header::ORIGIN, "https://example.org")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"regions":["emea"],"threshold_ms":152}"#))
        .unwrap();

    let response = harness.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://example.org"
    );
}

#[tokio::test]
async fn test_request_id_header_present() {
    let harness = TestHarness::new().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = harness.app.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_docs_disabled_by_config() {
    let mut config = Config::default();
    config.docs.enabled = false;
    let harness = TestHarness::with_config(config).await;

    let (status, _) = harness.get("/docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the analysis surface is unaffected
    let (status, _) = harness
        .post_json("/analyze", r#"{"regions":["emea"],"threshold_ms":152}"#)
        .await;
    assert_eq!(status, StatusCode::OK);
}
