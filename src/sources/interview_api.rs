use crate::error::{AnalyticsError, Result};
use crate::services::normalize::normalize_series;
use crate::types::{CanonicalPoint, DayRange, RawPoint};
use chrono::{SecondsFormat, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Outcome of inspecting the primary time-series response.
enum PrimaryOutcome {
    Series(Vec<RawPoint>),
    FallbackEligible,
}

/// REST client for the interview analytics backend.
///
/// Retrieval is two-tier: the time-series endpoint is tried first, and any
/// response judged unusable (404, non-JSON content type, logical failure,
/// or a malformed `series` field) is retried against the per-user
/// aggregate-stats endpoint, which yields a single synthesized point.
/// A transport-level failure is terminal and never falls back.
#[derive(Clone)]
pub struct InterviewApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
    user_id: Option<String>,
}

impl InterviewApiClient {
    /// Create a new client for the given backend.
    pub fn new(
        base_url: impl Into<String>,
        auth_token: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .user_agent("OrbitAnalytics/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token,
            user_id,
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Fetch the canonical time series for a day-range window.
    ///
    /// Primary-path points are normalized through the alias table; the
    /// fallback path always downgrades to one synthetic point, so callers
    /// must render a one-point series meaningfully.
    pub async fn fetch_series(&self, days: DayRange) -> Result<Vec<CanonicalPoint>> {
        match self.fetch_primary(days).await? {
            PrimaryOutcome::Series(raw) => {
                info!("Fetched {} raw points for the {}d window", raw.len(), days);
                Ok(normalize_series(&raw))
            }
            PrimaryOutcome::FallbackEligible => {
                warn!("Primary time-series unusable, trying aggregate-stats fallback");
                self.fetch_stats_fallback().await
            }
        }
    }

    async fn fetch_primary(&self, days: DayRange) -> Result<PrimaryOutcome> {
        let url = format!(
            "{}/api/interviews/analytics/time-series?days={}",
            self.base_url, days
        );

        let response = self.get(&url).send().await?;
        let status = response.status();
        let is_json = declares_json(&response);
        let text = response.text().await?;

        if status == StatusCode::NOT_FOUND || !is_json {
            debug!(
                "Primary response not parseable as a series (status {}, json={})",
                status, is_json
            );
            return Ok(PrimaryOutcome::FallbackEligible);
        }

        let json: Value = match serde_json::from_str(&text) {
            Ok(json) => json,
            // A garbled body on an otherwise OK response is a hard error;
            // on a failing status it is just another unusable response.
            Err(e) if status.is_success() => {
                return Err(AnalyticsError::Parse {
                    status: status.as_u16(),
                    message: e.to_string(),
                });
            }
            Err(_) => return Ok(PrimaryOutcome::FallbackEligible),
        };

        // Logical failure and a missing/non-array `series` are not
        // distinguished; either makes the response fallback-eligible.
        let failed = !status.is_success()
            || json.get("success").and_then(Value::as_bool) == Some(false);
        match json.get("series").and_then(Value::as_array) {
            Some(points) if !failed => Ok(PrimaryOutcome::Series(points.clone())),
            _ => Ok(PrimaryOutcome::FallbackEligible),
        }
    }

    async fn fetch_stats_fallback(&self) -> Result<Vec<CanonicalPoint>> {
        let user_id = self
            .user_id
            .as_ref()
            .ok_or(AnalyticsError::FallbackUnavailable)?;
        let url = format!("{}/api/interviews/user/{}/stats", self.base_url, user_id);

        let response = self.get(&url).send().await?;
        let status = response.status();
        let is_json = declares_json(&response);
        let text = response.text().await?;

        if !is_json {
            return Err(AnalyticsError::FallbackFailure(format!(
                "non-JSON response (status {})",
                status
            )));
        }

        let json: Value = serde_json::from_str(&text).map_err(|e| {
            AnalyticsError::FallbackFailure(format!("invalid JSON (status {}): {}", status, e))
        })?;

        if !status.is_success() || json.get("success").and_then(Value::as_bool) == Some(false) {
            let message = json
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("stats error {}", status));
            return Err(AnalyticsError::FallbackFailure(message));
        }

        let stats = json
            .get("stats")
            .filter(|v| !v.is_null())
            .ok_or_else(|| AnalyticsError::FallbackFailure("stats missing".to_string()))?;

        let average = |key: &str| stats.get(key).and_then(Value::as_f64).unwrap_or(0.0);

        info!("Synthesized a single point from aggregate stats");
        Ok(vec![CanonicalPoint {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            overall: Some(average("averageOverallScore")),
            technical: Some(average("averageTechnicalScore")),
            communication: Some(average("averageCommunicationScore")),
            problem_solving: Some(average("averageProblemSolvingScore")),
        }])
    }
}

/// Whether the response declares a JSON body.
fn declares_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false)
}
