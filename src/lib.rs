//! Orbit Analytics - interview performance time-series pipeline
//!
//! Retrieves score time-series from the interview backend with a defensive
//! two-tier protocol (primary time-series endpoint, aggregate-stats
//! fallback), normalizes heterogeneous response shapes onto a canonical
//! point schema, and derives EMA/SMA smoothing overlays, a least-squares
//! trend estimate, a score-distribution histogram, and a CSV export.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

pub use config::Config;
pub use error::{AnalyticsError, Result};
pub use types::*;
