use serde::{Deserialize, Serialize};

/// Opaque record as returned by either backend endpoint.
///
/// Field names vary by backend version (`overall`, `overallScore`,
/// `averageOverallScore`, `overall_score` all denote the same quantity),
/// so no shape is assumed until normalization.
pub type RawPoint = serde_json::Value;

/// A time-series observation normalized to the four known score metrics
/// plus timestamp.
///
/// A metric is `None` only when no alias supplied a value; a score of 0 is
/// valid and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPoint {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_solving: Option<f64>,
}

/// Canonical point plus smoothing overlays on the overall score.
///
/// The EMA is defined for every point of a non-empty series (the first
/// point's EMA is its own value); the SMA stays `None` until a full
/// trailing window is available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPoint {
    #[serde(flatten)]
    pub point: CanonicalPoint,
    pub overall_ema: f64,
    pub overall_sma: Option<f64>,
}

/// One fixed histogram bin of the score distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBucket {
    pub range: &'static str,
    pub count: usize,
}
