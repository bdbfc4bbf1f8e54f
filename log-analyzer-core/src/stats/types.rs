use serde::Serialize;

/// Final per-url statistics, one row of the report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlStatisticRecord {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}
