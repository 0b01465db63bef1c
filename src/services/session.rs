//! Load-session state machine for the analytics view.
//!
//! "Already loading" and "already loaded" are first-class states rather
//! than a side-channel boolean, and every load carries a monotonically
//! increasing generation: a completed load commits its result only while
//! its generation is still the latest one issued, so an overlapping reload
//! can never be silently overwritten by a slower, older request.

use crate::error::AnalyticsError;
use crate::services::distribution::bucket_scores;
use crate::services::enrich::{enrich_series, EnrichConfig};
use crate::services::trend::analyze;
use crate::types::{
    CanonicalPoint, DayRange, DistributionBucket, EnrichedPoint, MetricKey, Trend,
};
use tracing::{debug, warn};

/// Lifecycle of the analytics view data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No load has been started yet.
    Idle,
    /// A load is outstanding.
    Loading,
    /// The latest load committed successfully (possibly with zero points).
    Ready,
    /// The latest load failed; the displayed series was cleared.
    Error(String),
}

/// Token tying an in-flight load to the session generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Holds the current series snapshot and its derived views.
///
/// The session itself performs no I/O: callers start a load, run the fetch,
/// and feed the outcome back through [`AnalyticsSession::complete`].
pub struct AnalyticsSession {
    state: SessionState,
    config: EnrichConfig,
    days: DayRange,
    generation: u64,
    series: Vec<EnrichedPoint>,
    slope: f64,
    trend: Trend,
    distribution: Vec<DistributionBucket>,
}

impl AnalyticsSession {
    pub fn new(days: DayRange, config: EnrichConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
            days,
            generation: 0,
            series: Vec::new(),
            slope: 0.0,
            trend: Trend::Flat,
            distribution: Vec::new(),
        }
    }

    /// Start the initial load.
    ///
    /// Returns a generation only from `Idle`, so however many times the
    /// triggering lifecycle event fires, at most one initial load starts.
    pub fn ensure_started(&mut self) -> Option<Generation> {
        match self.state {
            SessionState::Idle => Some(self.begin_load(self.days)),
            _ => None,
        }
    }

    /// Start a load for a (possibly new) day range.
    ///
    /// Always issues a fresh generation, including while `Loading`: an
    /// outstanding older load becomes stale and its result will be
    /// discarded on completion.
    pub fn begin_load(&mut self, days: DayRange) -> Generation {
        self.days = days;
        self.generation += 1;
        self.state = SessionState::Loading;
        debug!(
            "Load generation {} started for the {}d window",
            self.generation, days
        );
        Generation(self.generation)
    }

    /// Commit the outcome of a load.
    ///
    /// Returns `false` when the generation is stale and the result was
    /// discarded. On success the canonical series is enriched and the
    /// trend and distribution are recomputed; on failure the displayed
    /// series is cleared rather than left stale.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<Vec<CanonicalPoint>, AnalyticsError>,
    ) -> bool {
        if generation.0 != self.generation {
            warn!(
                "Discarding stale load result (generation {}, latest is {})",
                generation.0, self.generation
            );
            return false;
        }

        match result {
            Ok(series) => {
                self.series = enrich_series(&series, self.config);
                let (slope, trend) = analyze(&self.series, MetricKey::Overall);
                self.slope = slope;
                self.trend = trend;
                self.distribution = bucket_scores(&self.series);
                self.state = SessionState::Ready;
            }
            Err(e) => {
                self.series.clear();
                self.slope = 0.0;
                self.trend = Trend::Flat;
                self.distribution.clear();
                self.state = SessionState::Error(e.to_string());
            }
        }
        true
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn days(&self) -> DayRange {
        self.days
    }

    /// The enriched series snapshot from the latest committed load.
    pub fn series(&self) -> &[EnrichedPoint] {
        &self.series
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn distribution(&self) -> &[DistributionBucket] {
        &self.distribution
    }

    /// True when the latest load succeeded but produced no points. This is
    /// a distinct presentation, not an error.
    pub fn is_empty(&self) -> bool {
        self.state == SessionState::Ready && self.series.is_empty()
    }

    /// Recompute slope and trend for a different metric without refetching.
    pub fn analyze_metric(&self, metric: MetricKey) -> (f64, Trend) {
        analyze(&self.series, metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(timestamp: &str, overall: f64) -> CanonicalPoint {
        CanonicalPoint {
            timestamp: timestamp.to_string(),
            overall: Some(overall),
            technical: None,
            communication: None,
            problem_solving: None,
        }
    }

    fn new_session() -> AnalyticsSession {
        AnalyticsSession::new(DayRange::ThirtyDays, EnrichConfig::default())
    }

    #[test]
    fn test_initial_load_starts_exactly_once() {
        let mut session = new_session();
        assert!(session.ensure_started().is_some());
        assert_eq!(session.state(), &SessionState::Loading);
        // Repeated lifecycle triggers do not start another load.
        assert!(session.ensure_started().is_none());
    }

    #[test]
    fn test_successful_commit_derives_views() {
        let mut session = new_session();
        let generation = session.ensure_started().unwrap();

        let committed = session.complete(
            generation,
            Ok(vec![
                canonical("2024-01-01T00:00:00Z", 5.0),
                canonical("2024-01-02T00:00:00Z", 7.0),
            ]),
        );

        assert!(committed);
        assert_eq!(session.state(), &SessionState::Ready);
        assert_eq!(session.series().len(), 2);
        assert_eq!(session.slope(), 2.0);
        assert_eq!(session.trend(), Trend::Improving);
        assert_eq!(session.distribution().len(), 5);
        assert!(!session.is_empty());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut session = new_session();
        let first = session.ensure_started().unwrap();
        // Range change while the first load is still outstanding.
        let second = session.begin_load(DayRange::SevenDays);

        // The slow, older load completes last; its result must not win.
        assert!(session.complete(second, Ok(vec![canonical("2024-01-02T00:00:00Z", 8.0)])));
        assert!(!session.complete(first, Ok(vec![canonical("2024-01-01T00:00:00Z", 1.0)])));

        assert_eq!(session.series().len(), 1);
        assert_eq!(session.series()[0].point.overall, Some(8.0));
        assert_eq!(session.days(), DayRange::SevenDays);
    }

    #[test]
    fn test_failure_clears_the_displayed_series() {
        let mut session = new_session();
        let generation = session.ensure_started().unwrap();
        session.complete(generation, Ok(vec![canonical("2024-01-01T00:00:00Z", 5.0)]));
        assert_eq!(session.series().len(), 1);

        let generation = session.begin_load(DayRange::ThirtyDays);
        session.complete(generation, Err(AnalyticsError::FallbackUnavailable));

        assert!(matches!(session.state(), SessionState::Error(_)));
        assert!(session.series().is_empty());
        assert!(session.distribution().is_empty());
        assert_eq!(session.trend(), Trend::Flat);
    }

    #[test]
    fn test_empty_success_is_a_distinct_state_not_an_error() {
        let mut session = new_session();
        let generation = session.ensure_started().unwrap();
        session.complete(generation, Ok(Vec::new()));

        assert_eq!(session.state(), &SessionState::Ready);
        assert!(session.is_empty());
    }

    #[test]
    fn test_reload_recovers_from_error() {
        let mut session = new_session();
        let generation = session.ensure_started().unwrap();
        session.complete(generation, Err(AnalyticsError::FallbackUnavailable));
        assert!(matches!(session.state(), SessionState::Error(_)));

        // Recovery is strictly a new user-initiated load.
        let generation = session.begin_load(session.days());
        session.complete(generation, Ok(vec![canonical("2024-01-01T00:00:00Z", 6.0)]));
        assert_eq!(session.state(), &SessionState::Ready);
        assert_eq!(session.series().len(), 1);
    }
}
