//! Per-region aggregation over the telemetry dataset.

pub mod stats;

use crate::{metrics::track_analysis, telemetry::Dataset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use utoipa::ToSchema;

/// Percentile reported as `p95_latency`
const LATENCY_PERCENTILE: f64 = 95.0;

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// Regions to summarize, in the order they should be reported
    #[schema(example = json!(["emea", "amer"]))]
    pub regions: Vec<String>,
    /// Latency above which a sample counts as a breach
    #[schema(example = 152)]
    pub threshold_ms: i64,
}

/// Summary statistics for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionSummary {
    pub region: String,
    /// Mean latency in milliseconds, two decimals
    pub avg_latency: f64,
    /// 95th percentile latency in milliseconds, two decimals
    pub p95_latency: f64,
    /// Mean uptime percentage, three decimals
    pub avg_uptime: f64,
    /// Samples whose latency is strictly above the threshold
    pub breaches: u64,
}

/// Summarize each requested region in request order.
///
/// Regions without samples are skipped and a region listed more than once is
/// reported once, at the position of its first occurrence.
pub fn analyze(dataset: &Dataset, request: &AnalysisRequest) -> Vec<RegionSummary> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(request.regions.len());
    let mut summaries = Vec::with_capacity(request.regions.len());

    for region in &request.regions {
        if !seen.insert(region.as_str()) {
            continue;
        }
        if let Some(summary) = summarize_region(dataset, region, request.threshold_ms) {
            summaries.push(summary);
        }
    }

    track_analysis(seen.len(), summaries.len());
    debug!(
        requested = request.regions.len(),
        matched = summaries.len(),
        threshold_ms = request.threshold_ms,
        "Analyzed telemetry"
    );

    summaries
}

/// Summary for a single region, or `None` when the dataset has no samples for it.
pub fn summarize_region(
    dataset: &Dataset,
    region: &str,
    threshold_ms: i64,
) -> Option<RegionSummary> {
    let mut latencies = Vec::new();
    let mut uptimes = Vec::new();
    for record in dataset.region_records(region) {
        latencies.push(record.latency_ms);
        uptimes.push(record.uptime_pct);
    }

    if latencies.is_empty() {
        return None;
    }

    let threshold = threshold_ms as f64;
    let breaches = latencies.iter().filter(|&&l| l > threshold).count() as u64;

    Some(RegionSummary {
        region: region.to_string(),
        avg_latency: stats::round_to(stats::mean(&latencies), 2),
        p95_latency: stats::round_to(stats::percentile(&latencies, LATENCY_PERCENTILE), 2),
        avg_uptime: stats::round_to(stats::mean(&uptimes), 3),
        breaches,
    })
}
