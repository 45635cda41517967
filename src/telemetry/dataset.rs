use super::TelemetryRecord;

/// Sample telemetry: twelve daily samples for each of three regions.
const BUILTIN: &[(&str, &str, f64, f64, u32)] = &[
    ("apac", "payments", 118.83, 97.493, 20250301),
    ("apac", "support", 217.2, 98.751, 20250302),
    ("apac", "checkout", 120.65, 98.982, 20250303),
    ("apac", "payments", 135.75, 99.347, 20250304),
    ("apac", "analytics", 189.06, 97.935, 20250305),
    ("apac", "support", 160.37, 97.497, 20250306),
    ("apac", "checkout", 197.0, 97.9, 20250307),
    ("apac", "payments", 157.82, 98.601, 20250308),
    ("apac", "recommendations", 190.88, 98.826, 20250309),
    ("apac", "catalog", 203.42, 98.248, 20250310),
    ("apac", "payments", 213.55, 98.486, 20250311),
    ("apac", "support", 188.33, 98.787, 20250312),
    ("emea", "payments", 194.59, 99.211, 20250301),
    ("emea", "analytics", 149.81, 98.844, 20250302),
    ("emea", "recommendations", 219.42, 98.932, 20250303),
    ("emea", "support", 192.47, 99.061, 20250304),
    ("emea", "payments", 159.13, 99.212, 20250305),
    ("emea", "analytics", 229.88, 97.918, 20250306),
    ("emea", "support", 138.33, 98.835, 20250307),
    ("emea", "checkout", 199.58, 98.969, 20250308),
    ("emea", "catalog", 139.4, 99.444, 20250309),
    ("emea", "support", 151.95, 98.836, 20250310),
    ("emea", "catalog", 138.25, 99.297, 20250311),
    ("emea", "analytics", 226.79, 98.66, 20250312),
    ("amer", "support", 179.11, 97.586, 20250301),
    ("amer", "checkout", 217.13, 98.863, 20250302),
    ("amer", "payments", 167.45, 97.965, 20250303),
    ("amer", "catalog", 173.84, 97.369, 20250304),
    ("amer", "analytics", 131.92, 98.234, 20250305),
    ("amer", "support", 176.55, 97.179, 20250306),
    ("amer", "payments", 212.66, 97.622, 20250307),
    ("amer", "analytics", 212.37, 99.215, 20250308),
    ("amer", "checkout", 210.93, 98.062, 20250309),
    ("amer", "catalog", 213.86, 97.522, 20250310),
    ("amer", "analytics", 145.49, 98.801, 20250311),
    ("amer", "payments", 206.66, 97.819, 20250312),
];

pub(super) fn builtin_records() -> Vec<TelemetryRecord> {
    BUILTIN
        .iter()
        .map(|&(region, service, latency_ms, uptime_pct, timestamp)| {
            TelemetryRecord::new(region, service, latency_ms, uptime_pct, timestamp)
        })
        .collect()
}
