pub mod distribution;
pub mod enrich;
pub mod export;
pub mod normalize;
pub mod session;
pub mod trend;

pub use distribution::{bucket_scores, SCORE_BUCKETS};
pub use enrich::{enrich_series, EnrichConfig};
pub use export::{export_to_file, write_csv, DEFAULT_EXPORT_FILENAME};
pub use normalize::{normalize_point, normalize_series};
pub use session::{AnalyticsSession, Generation, SessionState};
pub use trend::{analyze, compute_slope};
