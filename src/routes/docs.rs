use crate::{error::AppError, server::Server};
use axum::{Router, http::header, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Telemetry Analyzer API",
        version = "1.0.0",
        description = "Per-region latency and uptime summaries over a fixed telemetry dataset"
    ),
    paths(
        crate::routes::root::read_root,
        crate::routes::analyze::analyze_telemetry,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            crate::routes::ApiErrorResponse,
            crate::routes::root::RootResponse,
            crate::analysis::AnalysisRequest,
            crate::analysis::RegionSummary,
            crate::health::HealthResponse,
            crate::health::HealthStatus,
            crate::health::HealthCheckResult,
            crate::health::HealthSummary,
        )
    ),
    tags(
        (name = "Telemetry", description = "Telemetry analysis endpoints"),
        (name = "Health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` plus the OpenAPI document as JSON and YAML
pub fn create_docs_routes() -> Router<Server> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .route("/docs/openapi.yaml", get(openapi_yaml))
}

async fn openapi_yaml() -> Result<([(header::HeaderName, &'static str); 1], String), AppError> {
    let spec = ApiDoc::openapi();
    let yaml = serde_yaml_ng::to_string(&spec).map_err(|e| {
        AppError::Internal(format!("Failed to serialize OpenAPI spec to YAML: {e}"))
    })?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestServerBuilder;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[test]
    fn test_openapi_lists_operations() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/"));
        assert!(spec.paths.paths.contains_key("/analyze"));
        assert!(spec.paths.paths.contains_key("/health"));
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let server = TestServerBuilder::new().build().await;
        let app = create_docs_routes().with_state(server);

        let request = Request::builder()
            .uri("/docs/openapi.json")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "Telemetry Analyzer API");
        assert!(json["components"]["schemas"]["RegionSummary"].is_object());
    }

    #[tokio::test]
    async fn test_openapi_yaml_served() {
        let server = TestServerBuilder::new().build().await;
        let app = create_docs_routes().with_state(server);

        let request = Request::builder()
            .uri("/docs/openapi.yaml")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/yaml"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let yaml = String::from_utf8(body.to_vec()).unwrap();
        assert!(yaml.contains("/analyze"));
    }
}
