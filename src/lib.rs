pub mod analysis;
pub mod commands;
pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

pub use analysis::{AnalysisRequest, RegionSummary, analyze};
pub use config::Config;
pub use server::Server;
pub use telemetry::{Dataset, TelemetryRecord};
