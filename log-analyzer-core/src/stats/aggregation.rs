use crate::ingest::ParsedObservation;
use crate::stats::types::UrlStatisticRecord;
use ahash::AHashMap;

struct UrlAccumulator {
    url: String,
    count: u64,
    time_sum: f64,
    durations: Vec<f64>,
}

impl UrlAccumulator {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            count: 0,
            time_sum: 0.0,
            durations: Vec::new(),
        }
    }

    fn record(&mut self, duration: f64) {
        self.count += 1;
        self.time_sum += duration;
        self.durations.push(duration);
    }

    fn into_record(mut self, total_requests: u64, total_time: f64) -> UrlStatisticRecord {
        self.durations.sort_by(f64::total_cmp);

        UrlStatisticRecord {
            count_perc: percentage(self.count as f64, total_requests as f64),
            time_perc: percentage(self.time_sum, total_time),
            time_avg: if self.count == 0 {
                0.0
            } else {
                self.time_sum / self.count as f64
            },
            time_max: self.durations.last().copied().unwrap_or(0.0),
            time_med: median_of_sorted(&self.durations),
            url: self.url,
            count: self.count,
            time_sum: self.time_sum,
        }
    }
}

fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Median of an ascending slice; the mean of the two middle values for even
/// lengths, `0.0` when empty.
pub(crate) fn median_of_sorted(values: &[f64]) -> f64 {
    let n = values.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => values[n / 2],
        _ => (values[n / 2 - 1] + values[n / 2]) / 2.0,
    }
}

/// Per-url running totals for a single pipeline run.
///
/// Urls are kept in first-seen order so that the final ranking is stable for
/// urls with the same total time.
#[derive(Default)]
pub struct StatsAggregator {
    index: AHashMap<String, usize>,
    urls: Vec<UrlAccumulator>,
    observations: u64,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observation: &ParsedObservation<'_>) {
        let slot = match self.index.get(observation.url) {
            Some(&slot) => slot,
            None => {
                let slot = self.urls.len();
                self.urls.push(UrlAccumulator::new(observation.url));
                self.index.insert(observation.url.to_string(), slot);
                slot
            }
        };

        self.urls[slot].record(observation.duration);
        self.observations += 1;
    }

    pub fn observations(&self) -> u64 {
        self.observations
    }

    pub fn distinct_urls(&self) -> usize {
        self.urls.len()
    }

    /// Ranks every url by total request time, highest first.
    pub fn finish(self) -> Vec<UrlStatisticRecord> {
        let total_requests: u64 = self.urls.iter().map(|u| u.count).sum();
        let total_time: f64 = self.urls.iter().map(|u| u.time_sum).sum();

        let mut records: Vec<_> = self
            .urls
            .into_iter()
            .map(|u| u.into_record(total_requests, total_time))
            .collect();

        records.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
        records
    }
}

/// Aggregates a complete sequence of observations in one go.
pub fn aggregate<'a, I>(observations: I) -> Vec<UrlStatisticRecord>
where
    I: IntoIterator<Item = ParsedObservation<'a>>,
{
    let mut agg = StatsAggregator::new();
    for observation in observations {
        agg.push(&observation);
    }
    agg.finish()
}
