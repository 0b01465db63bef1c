use crate::types::DayRange;
use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL.
    pub api_base: String,
    /// Bearer token sent with every request, when known.
    pub auth_token: Option<String>,
    /// User id keying the aggregate-stats fallback endpoint.
    pub user_id: Option<String>,
    /// Day-range window for the time-series query.
    pub days: DayRange,
    /// Destination for the CSV export.
    pub export_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("ANALYTICS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            auth_token: env::var("ANALYTICS_AUTH_TOKEN").ok(),
            user_id: env::var("ANALYTICS_USER_ID").ok(),
            days: env::var("ANALYTICS_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .and_then(DayRange::from_days)
                .unwrap_or_default(),
            export_path: env::var("ANALYTICS_EXPORT_PATH").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = Config {
            api_base: "http://localhost:8080".to_string(),
            auth_token: Some("token-123".to_string()),
            user_id: Some("42".to_string()),
            days: DayRange::ThirtyDays,
            export_path: None,
        };

        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.days.as_days(), 30);
        assert!(config.export_path.is_none());
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            api_base: "http://test".to_string(),
            auth_token: None,
            user_id: None,
            days: DayRange::SevenDays,
            export_path: Some("out.csv".to_string()),
        };

        let cloned = config.clone();
        assert_eq!(cloned.api_base, config.api_base);
        assert_eq!(cloned.days, config.days);
        assert_eq!(cloned.export_path, config.export_path);
    }
}
