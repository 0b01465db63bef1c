//! Moving-average enrichment of the canonical series.

use crate::types::{CanonicalPoint, EnrichedPoint};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Smoothing parameters for the overall-score overlays.
#[derive(Debug, Clone, Copy)]
pub struct EnrichConfig {
    /// EMA smoothing constant.
    pub ema_alpha: f64,
    /// SMA trailing window size.
    pub sma_window: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            ema_alpha: 0.25,
            sma_window: 5,
        }
    }
}

/// Parse a point timestamp: RFC 3339, a bare datetime, or a bare date.
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Sort the series ascending by parsed timestamp and attach EMA/SMA over
/// the overall score.
///
/// The sort is stable; points whose timestamps do not parse compare equal
/// and keep their original relative order. Missing overall values count
/// as 0 in both averages. The EMA carries the unrounded value forward and
/// only rounds what is stored, so rounding error does not compound.
pub fn enrich_series(series: &[CanonicalPoint], config: EnrichConfig) -> Vec<EnrichedPoint> {
    let mut sorted: Vec<CanonicalPoint> = series.to_vec();
    sorted.sort_by(|a, b| {
        match (parse_timestamp(&a.timestamp), parse_timestamp(&b.timestamp)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    });

    let mut prev_ema: Option<f64> = None;
    let mut enriched = Vec::with_capacity(sorted.len());

    for (i, point) in sorted.iter().enumerate() {
        let value = point.overall.unwrap_or(0.0);
        let ema = match prev_ema {
            None => value,
            Some(prev) => config.ema_alpha * value + (1.0 - config.ema_alpha) * prev,
        };
        prev_ema = Some(ema);

        let sma = if i + 1 < config.sma_window {
            None
        } else {
            let window = &sorted[i + 1 - config.sma_window..=i];
            let sum: f64 = window.iter().map(|p| p.overall.unwrap_or(0.0)).sum();
            Some(round2(sum / config.sma_window as f64))
        };

        enriched.push(EnrichedPoint {
            point: point.clone(),
            overall_ema: round2(ema),
            overall_sma: sma,
        });
    }

    enriched
}
