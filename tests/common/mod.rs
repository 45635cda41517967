use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use telemetry_analyzer::{Config, Server};
use tower::ServiceExt;

/// Unified test harness around the full application router
pub struct TestHarness {
    #[allow(dead_code)]
    pub config: Config,
    pub app: Router,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    pub async fn with_config(mut config: Config) -> Self {
        config.metrics.enabled = false;
        config.logging.log_request = false;

        let server = Server::new(config.clone()).await.unwrap();
        let app = server.create_app();

        Self { config, app }
    }

    /// Send a request and return the status with the decoded JSON body
    /// (`Value::Null` for an empty or non-JSON body)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}
