//! Telemetry records and the read-only dataset the analyzer runs over.
//!
//! The dataset is built once at startup and shared between requests behind an
//! [`Arc`]; nothing on the request path can mutate it.

mod dataset;

use crate::health::{HealthCheckResult, HealthChecker};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// A single telemetry sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub service: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
    /// Sample date encoded as `YYYYMMDD`
    pub timestamp: u32,
}

impl TelemetryRecord {
    pub fn new(
        region: impl Into<String>,
        service: impl Into<String>,
        latency_ms: f64,
        uptime_pct: f64,
        timestamp: u32,
    ) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
            latency_ms,
            uptime_pct,
            timestamp,
        }
    }
}

/// Immutable, ordered collection of telemetry records.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[TelemetryRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The sample dataset compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(dataset::builtin_records())
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to `region`, in dataset order. Matching is exact and
    /// case-sensitive.
    pub fn region_records<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = &'a TelemetryRecord> + 'a {
        self.records.iter().filter(move |r| r.region == region)
    }

    /// Distinct regions with their record counts, in order of first appearance.
    pub fn regions(&self) -> Vec<(String, usize)> {
        let mut regions: Vec<(String, usize)> = Vec::new();
        for record in self.records.iter() {
            match regions.iter_mut().find(|(name, _)| *name == record.region) {
                Some((_, count)) => *count += 1,
                None => regions.push((record.region.clone(), 1)),
            }
        }
        regions
    }

    pub fn health_checker(&self) -> Arc<dyn HealthChecker> {
        Arc::new(DatasetHealthChecker {
            dataset: self.clone(),
        })
    }
}

/// Reports whether the dataset has anything to analyze.
pub struct DatasetHealthChecker {
    dataset: Dataset,
}

#[async_trait]
impl HealthChecker for DatasetHealthChecker {
    fn name(&self) -> &str {
        "dataset"
    }

    async fn check(&self) -> HealthCheckResult {
        if self.dataset.is_empty() {
            return HealthCheckResult::unhealthy("Telemetry dataset is empty".to_string());
        }

        let regions: serde_json::Map<String, serde_json::Value> = self
            .dataset
            .regions()
            .into_iter()
            .map(|(name, count)| (name, json!(count)))
            .collect();

        HealthCheckResult::healthy_with_details(json!({
            "records": self.dataset.len(),
            "regions": regions,
        }))
    }
}
