mod aggregation;
mod types;


pub use aggregation::{StatsAggregator, aggregate};
pub use types::UrlStatisticRecord;
