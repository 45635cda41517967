//! Small numeric helpers used by the region aggregation.

use std::cmp::Ordering;

/// Arithmetic mean, accumulated left to right. Returns 0.0 for no samples.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for value in samples {
        sum += value;
    }
    sum / samples.len() as f64
}

/// Percentile of `samples` using linear interpolation between closest ranks.
///
/// The rank is `p / 100 * (n - 1)` over the sorted samples; the result
/// interpolates between the values at the floor and ceiling of that rank,
/// measuring from whichever neighbour is closer. `pct` is clamped to
/// `0.0..=100.0`. Returns 0.0 for no samples.
pub fn percentile(samples: &[f64], pct: f64) -> f64 {
    match samples.len() {
        0 => return 0.0,
        1 => return samples[0],
        _ => {}
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let p = pct.clamp(0.0, 100.0) / 100.0;
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    let (below, above) = (sorted[lower], sorted[upper]);
    let diff = above - below;
    if fraction >= 0.5 {
        above - diff * (1.0 - fraction)
    } else {
        below + diff * fraction
    }
}

/// Round to `decimals` fractional digits: scale, round half to even, unscale.
///
/// Ties are judged on the scaled value, so `174.405` scales to exactly
/// `17440.5` and rounds down to `174.4`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
