use crate::{health::HealthResponse, server::Server};
use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HealthCheckQuery {
    /// Run only the named check ("all" runs every check)
    #[serde(default)]
    pub check: Option<String>,
}

pub fn create_health_routes() -> Router<Server> {
    Router::new().route("/health", get(health_check))
}

/// Aggregated component health
#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    description = "Runs the registered component checks and aggregates their status",
    tags = ["Health"],
    params(HealthCheckQuery),
    responses(
        (status = 200, description = "Health report", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<Server>,
    Query(params): Query<HealthCheckQuery>,
) -> Json<HealthResponse> {
    let filter = params.check.as_deref();
    Json(server.health_service.check_health(filter).await)
}
