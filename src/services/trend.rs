//! Least-squares trend estimation over the enriched series.

use crate::types::{EnrichedPoint, MetricKey, Trend};

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Ordinary-least-squares slope over `(index, value)` pairs of the
/// selected metric.
///
/// Points without a defined, finite value are skipped; their indices are
/// preserved rather than re-packed, so gaps widen the x-spacing. Fewer
/// than 2 valid pairs yield a slope of 0.
pub fn compute_slope(series: &[EnrichedPoint], metric: MetricKey) -> f64 {
    let pairs: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            metric
                .value_of(&p.point)
                .filter(|v| v.is_finite())
                .map(|v| (i as f64, v))
        })
        .collect();

    if pairs.len() < 2 {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    round3((n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x))
}

/// Slope plus its Improving/Declining/Flat classification.
pub fn analyze(series: &[EnrichedPoint], metric: MetricKey) -> (f64, Trend) {
    let slope = compute_slope(series, metric);
    (slope, Trend::from_slope(slope))
}
