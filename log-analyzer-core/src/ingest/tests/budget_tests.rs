use crate::ingest::{AnalyzeError, BudgetVerdict, ErrorBudget};

fn budget_with(successes: u64, failures: u64, threshold: f64) -> ErrorBudget {
    let mut budget = ErrorBudget::new(threshold);
    for _ in 0..successes {
        budget.record(true);
    }
    for _ in 0..failures {
        budget.record(false);
    }
    budget
}

#[test]
fn empty_pass_is_not_an_error() {
    // Act
    let verdict = ErrorBudget::new(0.0).finish().unwrap();

    // Assert
    assert_eq!(verdict, BudgetVerdict::Empty);
}

#[test]
fn all_failures_exceed_budget() {
    // Arrange
    let budget = budget_with(0, 3, 0.2);

    // Act
    let err = budget.finish().unwrap_err();

    // Assert
    match err {
        AnalyzeError::ParseBudgetExceeded(e) => {
            assert_eq!(e.error_rate, 1.0);
            assert_eq!(e.error_threshold, 0.2);
            assert_eq!(e.errors, 3);
            assert_eq!(e.total_lines, 3);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn three_of_four_failures_exceed_quarter_budget() {
    // Arrange
    let budget = budget_with(1, 3, 0.25);

    // Act
    let err = budget.finish().unwrap_err();

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
fn rate_equal_to_threshold_is_within_budget() {
    // Arrange
    let budget = budget_with(3, 1, 0.25);

    // Act
    let verdict = budget.finish().unwrap();

    // Assert
    assert_eq!(
        verdict,
        BudgetVerdict::Within {
            total_lines: 4,
            errors: 1,
            error_rate: 0.25,
        }
    );
}

#[test]
fn zero_threshold_rejects_a_single_failure() {
    let budget = budget_with(99, 1, 0.0);
    assert!(budget.finish().is_err());
}

#[test]
fn counters_track_every_recorded_line() {
    let budget = budget_with(5, 2, 0.5);
    assert_eq!(budget.total_lines(), 7);
    assert_eq!(budget.errors(), 2);
}

#[test]
fn exceeded_message_reports_percentages() {
    let err = budget_with(0, 3, 0.2).finish().unwrap_err();
    assert_eq!(
        err.to_string(),
        "log parse error budget exceeded: 100.00% of 3 lines failed (allowed 20.00%)"
    );
}
