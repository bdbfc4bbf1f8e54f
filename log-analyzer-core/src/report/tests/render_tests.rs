use crate::report::{ReportError, ReportTemplate, render_report, report_file_name, write_report};
use crate::stats::UrlStatisticRecord;

use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn record(url: &str) -> UrlStatisticRecord {
    UrlStatisticRecord {
        url: url.to_string(),
        count: 2,
        count_perc: 100.0,
        time_sum: 0.5,
        time_perc: 100.0,
        time_avg: 0.25,
        time_max: 0.3,
        time_med: 0.25,
    }
}

#[test]
fn report_name_uses_dotted_date() {
    let date = NaiveDate::from_ymd_opt(2017, 6, 30).unwrap();
    assert_eq!(report_file_name(date), "report-2017.06.30.html");
}

#[test]
fn placeholder_is_replaced_with_json_table() {
    // Act
    let html = render_report("var table = $table_json;", &[record("/api/data")]).unwrap();

    // Assert
    let json = html
        .strip_prefix("var table = ")
        .and_then(|s| s.strip_suffix(';'))
        .unwrap();
    let parsed: Value = serde_json::from_str(json).unwrap();
    assert_eq!(parsed[0]["url"], "/api/data");
    assert_eq!(parsed[0]["count"], 2);
    assert_eq!(parsed[0]["time_med"], 0.25);
}

#[test]
fn braced_placeholder_and_other_dollars() {
    // Act
    let html = render_report("${table_json} $table_json_extra $other $$", &[]).unwrap();

    // Assert
    assert_eq!(html, "[] $table_json_extra $other $");
}

#[test]
fn escaped_dollar_is_not_a_placeholder() {
    // Act
    let html = render_report("price: $$5, literal $$table_json, table: $table_json", &[]).unwrap();

    // Assert
    assert_eq!(html, "price: $5, literal $table_json, table: []");
}

#[test]
fn non_ascii_urls_are_not_escaped() {
    let html = render_report("$table_json", &[record("/поиск")]).unwrap();
    assert!(html.contains("/поиск"));
}

#[test]
fn builtin_template_has_placeholder() {
    // Act
    let html = render_report(&ReportTemplate::Builtin.load().unwrap(), &[record("/x")]).unwrap();

    // Assert
    assert!(!html.contains("$table_json"));
    assert!(html.contains("\"url\": \"/x\""));
}

#[test]
fn write_report_uses_template_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let template = dir.path().join("report.html");
    fs::write(&template, "<script>var table = $table_json;</script>").unwrap();
    let report_path = dir.path().join("report-2025.02.14.html");

    // Act
    write_report(
        &[record("/a"), record("/b")],
        &report_path,
        &ReportTemplate::File(template),
    )
    .unwrap();

    // Assert
    let html = fs::read_to_string(&report_path).unwrap();
    assert!(html.starts_with("<script>var table = ["));
    assert!(html.contains("\"/b\""));
}

#[test]
fn missing_template_is_reported_and_nothing_written() {
    // Arrange
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("report-2025.02.14.html");

    // Act
    let err = write_report(
        &[record("/a")],
        &report_path,
        &ReportTemplate::File(dir.path().join("missing.html")),
    )
    .unwrap_err();

    // Assert
    assert!(matches!(err, ReportError::TemplateMissing { .. }));
    assert!(!report_path.exists());
}

#[test]
fn write_report_leaves_no_temporary_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("report-2025.02.14.html");

    // Act
    write_report(&[record("/a")], &report_path, &ReportTemplate::Builtin).unwrap();

    // Assert
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
