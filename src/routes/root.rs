use crate::server::Server;
use axum::{Router, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "Telemetry analysis endpoint is running. Please POST to /analyze";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

pub fn create_root_routes() -> Router<Server> {
    Router::new().route("/", get(read_root))
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    summary = "Service banner",
    description = "Confirms the service is running and points at the analysis endpoint",
    tags = ["Telemetry"],
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
