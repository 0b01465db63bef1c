//! Schema normalization across heterogeneous backend response shapes.
//!
//! Backend versions disagree on field names, so each canonical metric is
//! resolved through a fixed alias priority list. The tables below are the
//! single place where that schema drift lives.

use crate::types::{CanonicalPoint, RawPoint};
use serde_json::Value;

/// Alias priority per metric, newest backend naming first. Order is
/// significant and encodes assumed backend versioning priority.
pub const OVERALL_ALIASES: &[&str] = &[
    "overall",
    "overallScore",
    "averageOverallScore",
    "overall_score",
];
pub const TECHNICAL_ALIASES: &[&str] = &[
    "technical",
    "technicalScore",
    "averageTechnicalScore",
    "technical_score",
];
pub const COMMUNICATION_ALIASES: &[&str] = &[
    "communication",
    "communicationScore",
    "averageCommunicationScore",
    "communication_score",
];
pub const PROBLEM_SOLVING_ALIASES: &[&str] = &[
    "problemSolving",
    "problemSolvingScore",
    "averageProblemSolvingScore",
    "problem_solving_score",
];
pub const TIMESTAMP_ALIASES: &[&str] = &["timestamp", "date"];

/// Resolve a metric through its alias chain.
///
/// The first *defined* (present, non-null) value wins regardless of
/// truthiness, so a zero score survives normalization. A defined but
/// non-numeric value still wins the chain and resolves to `None`.
pub fn resolve_metric(raw: &RawPoint, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .find_map(|key| match raw.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_f64()),
        })
        .flatten()
}

fn resolve_timestamp(raw: &RawPoint) -> String {
    TIMESTAMP_ALIASES
        .iter()
        .filter_map(|key| raw.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Map one raw point onto the canonical schema.
pub fn normalize_point(raw: &RawPoint) -> CanonicalPoint {
    CanonicalPoint {
        timestamp: resolve_timestamp(raw),
        overall: resolve_metric(raw, OVERALL_ALIASES),
        technical: resolve_metric(raw, TECHNICAL_ALIASES),
        communication: resolve_metric(raw, COMMUNICATION_ALIASES),
        problem_solving: resolve_metric(raw, PROBLEM_SOLVING_ALIASES),
    }
}

/// Normalize a whole raw series, preserving point order.
pub fn normalize_series(raw: &[RawPoint]) -> Vec<CanonicalPoint> {
    raw.iter().map(normalize_point).collect()
}
