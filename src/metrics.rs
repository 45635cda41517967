use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::time::Instant;
use tracing::info;

/// Install the Prometheus recorder and serve it on `port`.
///
/// Must be called from within a tokio runtime; the HTTP exporter is spawned
/// onto it.
pub fn init_metrics_with_port(port: u16) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .add_global_label("service", env!("CARGO_PKG_NAME"))
        .install()?;

    info!("Metrics exporter listening on :{}/metrics", port);
    Ok(())
}

/// Middleware to collect HTTP request metrics
pub async fn metrics_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    let labels = [
        ("method", method.as_str().to_string()),
        ("path", path),
        ("status", status.as_str().to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    gauge!("http_requests_active").decrement(1.0);

    if status.is_server_error() {
        counter!("http_errors_total", &labels[..2]).increment(1);
    }

    response
}

/// Track one aggregation: regions asked for versus regions with data
pub fn track_analysis(requested: usize, matched: usize) {
    counter!("telemetry_regions_analyzed_total").increment(matched as u64);
    counter!("telemetry_regions_unmatched_total")
        .increment(requested.saturating_sub(matched) as u64);
}
