use crate::ingest::error::{AnalyzeError, BudgetExceeded};
use tracing::{error, warn};

/// Outcome of a file pass that stayed within its error budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetVerdict {
    /// No lines were offered at all.
    Empty,
    Within {
        total_lines: u64,
        errors: u64,
        error_rate: f64,
    },
}

/// Counts parse failures over one full file pass.
///
/// The verdict is only available through [`ErrorBudget::finish`], once every
/// line has been recorded.
#[derive(Debug, Clone)]
pub struct ErrorBudget {
    threshold: f64,
    total_lines: u64,
    errors: u64,
}

impl ErrorBudget {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            total_lines: 0,
            errors: 0,
        }
    }

    pub fn record(&mut self, parsed: bool) {
        self.total_lines += 1;
        if !parsed {
            self.errors += 1;
        }
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn finish(self) -> Result<BudgetVerdict, AnalyzeError> {
        if self.total_lines == 0 {
            warn!("empty log file provided");
            return Ok(BudgetVerdict::Empty);
        }

        let error_rate = self.errors as f64 / self.total_lines as f64;

        if error_rate > self.threshold {
            error!(
                error_rate = %format!("{:.2}%", error_rate * 100.0),
                error_threshold = %format!("{:.2}%", self.threshold * 100.0),
                total_lines = self.total_lines,
                errors = self.errors,
                "log parse error threshold exceeded"
            );

            return Err(BudgetExceeded {
                error_rate,
                error_threshold: self.threshold,
                total_lines: self.total_lines,
                errors: self.errors,
            }
            .into());
        }

        Ok(BudgetVerdict::Within {
            total_lines: self.total_lines,
            errors: self.errors,
            error_rate,
        })
    }
}
