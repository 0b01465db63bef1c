use crate::types::CanonicalPoint;
use std::fmt;

/// Selectable score metric for trend analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKey {
    #[default]
    Overall,
    Technical,
    Communication,
    ProblemSolving,
}

impl MetricKey {
    /// Read this metric off a canonical point.
    pub fn value_of(&self, point: &CanonicalPoint) -> Option<f64> {
        match self {
            MetricKey::Overall => point.overall,
            MetricKey::Technical => point.technical,
            MetricKey::Communication => point.communication,
            MetricKey::ProblemSolving => point.problem_solving,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Overall => "overall",
            MetricKey::Technical => "technical",
            MetricKey::Communication => "communication",
            MetricKey::ProblemSolving => "problemSolving",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "overall" => Some(MetricKey::Overall),
            "technical" => Some(MetricKey::Technical),
            "communication" => Some(MetricKey::Communication),
            "problemSolving" => Some(MetricKey::ProblemSolving),
            _ => None,
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of the least-squares slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Flat,
}

impl Trend {
    /// Slopes within ±0.02 are considered flat.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.02 {
            Trend::Improving
        } else if slope < -0.02 {
            Trend::Declining
        } else {
            Trend::Flat
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "Improving"),
            Trend::Declining => write!(f, "Declining"),
            Trend::Flat => write!(f, "Flat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_thresholds() {
        assert_eq!(Trend::from_slope(0.021), Trend::Improving);
        assert_eq!(Trend::from_slope(0.02), Trend::Flat);
        assert_eq!(Trend::from_slope(0.0), Trend::Flat);
        assert_eq!(Trend::from_slope(-0.02), Trend::Flat);
        assert_eq!(Trend::from_slope(-0.021), Trend::Declining);
    }

    #[test]
    fn test_metric_key_round_trip() {
        for key in [
            MetricKey::Overall,
            MetricKey::Technical,
            MetricKey::Communication,
            MetricKey::ProblemSolving,
        ] {
            assert_eq!(MetricKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(MetricKey::from_str("speed"), None);
    }

    #[test]
    fn test_metric_key_reads_the_right_field() {
        let point = CanonicalPoint {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            overall: Some(5.0),
            technical: Some(4.0),
            communication: None,
            problem_solving: Some(6.0),
        };
        assert_eq!(MetricKey::Overall.value_of(&point), Some(5.0));
        assert_eq!(MetricKey::Communication.value_of(&point), None);
        assert_eq!(MetricKey::ProblemSolving.value_of(&point), Some(6.0));
    }
}
