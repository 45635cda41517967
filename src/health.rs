use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl HealthCheckResult {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
            details: None,
            duration_ms: None,
        }
    }

    pub fn healthy_with_details(details: serde_json::Value) -> Self {
        Self {
            details: Some(details),
            ..Self::healthy()
        }
    }

    pub fn unhealthy(message: String) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message),
            details: None,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// The name of this health check component
    fn name(&self) -> &str;

    /// Perform the health check
    async fn check(&self) -> HealthCheckResult;
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub checks: HashMap<String, HealthCheckResult>,
    pub summary: HealthSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthSummary {
    pub total_checks: usize,
    pub healthy_count: usize,
    pub unhealthy_count: usize,
    pub total_duration_ms: u64,
}

pub struct HealthService {
    checkers: Arc<RwLock<HashMap<String, Arc<dyn HealthChecker>>>>,
}

impl HealthService {
    pub fn new() -> Self {
        Self {
            checkers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a health checker for a specific component
    pub async fn register(&self, checker: Arc<dyn HealthChecker>) {
        let name = checker.name().to_string();
        let mut checkers = self.checkers.write().await;
        checkers.insert(name, checker);
    }

    /// Run every registered check, or only the one named by `filter`.
    /// `Some("all")` behaves like `None`.
    pub async fn check_health(&self, filter: Option<&str>) -> HealthResponse {
        let checkers = self.checkers.read().await;
        let mut results = HashMap::new();
        let mut total_duration = 0u64;

        let checks_to_run: Vec<_> = match filter {
            None | Some("all") => checkers.iter().collect(),
            Some(specific) => checkers
                .iter()
                .filter(|(name, _)| name.as_str() == specific)
                .collect(),
        };

        for (name, checker) in checks_to_run {
            let start = Instant::now();
            let mut result = checker.check().await;
            let duration = start.elapsed().as_millis() as u64;
            result = result.with_duration(duration);
            total_duration += duration;
            results.insert(name.clone(), result);
        }

        let count = |status: HealthStatus| results.values().filter(|r| r.status == status).count();
        let healthy_count = count(HealthStatus::Healthy);
        let unhealthy_count = count(HealthStatus::Unhealthy);

        let overall_status = if unhealthy_count > 0 {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        let summary = HealthSummary {
            total_checks: results.len(),
            healthy_count,
            unhealthy_count,
            total_duration_ms: total_duration,
        };

        HealthResponse {
            status: overall_status,
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            checks: results,
            summary,
        }
    }

}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
