use crate::{
    analysis::{AnalysisRequest, RegionSummary, analyze},
    error::AppError,
    routes::ApiErrorResponse,
    server::Server,
};
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};

pub fn create_analyze_routes() -> Router<Server> {
    Router::new().route("/analyze", post(analyze_telemetry))
}

/// Per-region latency and uptime summary
#[utoipa::path(
    post,
    path = "/analyze",
    summary = "Analyze telemetry",
    description = "Summarizes latency and uptime for each requested region, in request order. \
                   Unknown regions are omitted and repeated regions are reported once.",
    tags = ["Telemetry"],
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "One summary per matched region", body = Vec<RegionSummary>),
        (status = 422, description = "Request body failed validation", body = ApiErrorResponse)
    )
)]
pub async fn analyze_telemetry(
    State(server): State<Server>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Vec<RegionSummary>>, AppError> {
    let Json(request) = payload?;
    Ok(Json(analyze(&server.dataset, &request)))
}
