//! One streaming pass over a log file: lines are parsed, counted against the
//! error budget, and folded into the per-url aggregator as they arrive.
//!
//! The decision to keep the result is made only after the last line. A file
//! over budget yields an error and the partially filled aggregator is dropped.

use crate::ingest::{AnalyzeError, BudgetVerdict, ErrorBudget, parse_line};
use crate::stats::{StatsAggregator, UrlStatisticRecord};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Ranked by total request time, highest first. Not truncated.
    pub records: Vec<UrlStatisticRecord>,
    pub total_lines: u64,
    pub errors: u64,
}

impl Analysis {
    pub fn parsed(&self) -> u64 {
        self.total_lines - self.errors
    }
}

pub fn analyze_lines<I, S>(lines: I, error_threshold: f64) -> Result<Analysis, AnalyzeError>
where
    I: IntoIterator<Item = Result<S, AnalyzeError>>,
    S: AsRef<str>,
{
    let mut budget = ErrorBudget::new(error_threshold);
    let mut agg = StatsAggregator::new();

    for line in lines {
        let line = line?;
        match parse_line(line.as_ref()) {
            Some(observation) => {
                agg.push(&observation);
                budget.record(true);
            }
            None => budget.record(false),
        }
    }

    match budget.finish()? {
        BudgetVerdict::Empty => Ok(Analysis {
            records: Vec::new(),
            total_lines: 0,
            errors: 0,
        }),
        BudgetVerdict::Within {
            total_lines,
            errors,
            error_rate,
        } => {
            debug!(
                total_lines,
                errors,
                error_rate,
                urls = agg.distinct_urls(),
                "log file within error budget"
            );

            Ok(Analysis {
                records: agg.finish(),
                total_lines,
                errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GOOD: &str = r#"1.1.1.1 - - [01/Jan/2024:10:00:00 +0000] "GET /api/data HTTP/1.1" 200 123 "-" "-" "-" "-" "-" 0.150"#;

    fn ok_lines(lines: &[&'static str]) -> Vec<Result<&'static str, AnalyzeError>> {
        lines.iter().map(|l| Ok(*l)).collect()
    }

    #[test]
    fn empty_input_yields_no_records_and_no_error() {
        // Act
        let analysis = analyze_lines(ok_lines(&[]), 0.1).unwrap();

        // Assert
        assert!(analysis.records.is_empty());
        assert_eq!(analysis.total_lines, 0);
    }

    #[test]
    fn failures_within_budget_keep_parsed_lines() {
        // Arrange
        let lines = ok_lines(&["INVALID LOG LINE", GOOD, "INVALID LOG LINE"]);

        // Act
        let analysis = analyze_lines(lines, 0.75).unwrap();

        // Assert
        assert_eq!(analysis.total_lines, 3);
        assert_eq!(analysis.errors, 2);
        assert_eq!(analysis.parsed(), 1);
        assert_eq!(analysis.records.len(), 1);
        assert_eq!(analysis.records[0].url, "/api/data");
        assert_eq!(analysis.records[0].count, 1);
    }

    #[test]
    fn over_budget_discards_everything() {
        // Arrange
        let lines = ok_lines(&["INVALID", "INVALID", GOOD, "INVALID"]);

        // Act
        let err = analyze_lines(lines, 0.25).unwrap_err();

        // Assert
        match err {
            AnalyzeError::ParseBudgetExceeded(e) => {
                assert_eq!(e.error_rate, 0.75);
                assert_eq!(e.total_lines, 4);
                assert_eq!(e.errors, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn read_error_aborts_the_pass() {
        // Arrange
        let lines: Vec<Result<&str, AnalyzeError>> = vec![
            Ok(GOOD),
            Err(AnalyzeError::read(
                "access.log",
                std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
            )),
            Ok(GOOD),
        ];

        // Act
        let err = analyze_lines(lines, 1.0).unwrap_err();

        // Assert
        assert!(matches!(err, AnalyzeError::Read { .. }));
    }
}
