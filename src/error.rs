use thiserror::Error;

/// Analytics pipeline error types.
///
/// `Network` is terminal: a transport failure on the primary request is
/// never recovered via the stats fallback. Responses that arrived but are
/// unusable (404, wrong content type, logical failure, malformed schema)
/// route through the fallback instead and only surface here when the
/// fallback itself cannot run or fails.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON (status {status}): {message}")]
    Parse { status: u16, message: String },

    #[error("User ID not found for fallback")]
    FallbackUnavailable,

    #[error("Fallback stats error: {0}")]
    FallbackFailure(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
