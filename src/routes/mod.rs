pub mod analyze;
pub mod docs;
pub mod health;
pub mod root;

pub use analyze::create_analyze_routes;
pub use docs::create_docs_routes;
pub use health::create_health_routes;
pub use root::create_root_routes;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error category, e.g. "Validation error"
    pub error: String,
    /// Human readable detail
    pub message: String,
}
