pub mod metric;
pub mod point;
pub mod range;

pub use metric::{MetricKey, Trend};
pub use point::{CanonicalPoint, DistributionBucket, EnrichedPoint, RawPoint};
pub use range::DayRange;
