//! Histogram bucketing of overall scores.

use crate::types::{DistributionBucket, EnrichedPoint};

/// Fixed score bins in declaration order, each with its exclusive upper
/// bound. Matching is first-match-wins, so the last bin also catches
/// out-of-domain values above 10 rather than rejecting them.
pub const SCORE_BUCKETS: &[(&str, f64)] = &[
    ("0-2", 2.0),
    ("2-4", 4.0),
    ("4-6", 6.0),
    ("6-8", 8.0),
    ("8-10", f64::INFINITY),
];

/// Partition the overall scores into the fixed bins.
///
/// Undefined scores count as 0. Output preserves bin declaration order and
/// includes zero-count bins; an empty series yields an empty vec.
pub fn bucket_scores(series: &[EnrichedPoint]) -> Vec<DistributionBucket> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut counts = vec![0usize; SCORE_BUCKETS.len()];
    for point in series {
        let v = point.point.overall.unwrap_or(0.0);
        let idx = SCORE_BUCKETS
            .iter()
            .position(|(_, upper)| v < *upper)
            .unwrap_or(SCORE_BUCKETS.len() - 1);
        counts[idx] += 1;
    }

    SCORE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(&(label, _), count)| DistributionBucket { range: label, count })
        .collect()
}
