use crate::conf::AnalyzerConfig;
use crate::ingest::{LogFileDescriptor, LogLines, locate_latest};
use crate::pipeline::analyze_lines;
use crate::report::{ReportTemplate, report_file_name, write_report};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// How a pipeline run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `log_dir` holds no matching log file.
    NoLogFile,
    /// A report for the log's date is already present; nothing was read.
    ReportExists { report_path: PathBuf },
    /// The log had no parseable lines; no report was written.
    EmptyLog { log_path: PathBuf },
    Generated { report_path: PathBuf, rows: usize },
}

/// Runs locate → decode → parse/gate → aggregate → render once.
pub fn run_analysis(cfg: &AnalyzerConfig) -> Result<RunOutcome> {
    //--------------------------------------------------------------------------
    // Pick the log file
    //--------------------------------------------------------------------------
    let descriptor = match &cfg.log_file {
        Some(path) => LogFileDescriptor::from_path(path).with_context(|| {
            format!("log_file does not follow the log naming convention: {}", path.display())
        })?,
        None => {
            info!(log_dir = %cfg.log_dir.display(), "searching for the latest log file");
            match locate_latest(&cfg.log_dir)? {
                Some(d) => d,
                None => {
                    warn!(log_dir = %cfg.log_dir.display(), "no log files available for analysis");
                    return Ok(RunOutcome::NoLogFile);
                }
            }
        }
    };

    info!(
        file = %descriptor.path.display(),
        file_type = %descriptor.compression,
        date = %descriptor.date,
        "log file found"
    );

    //--------------------------------------------------------------------------
    // Skip dates that already have a report
    //--------------------------------------------------------------------------
    let report_name = report_file_name(descriptor.date);
    let report_path = cfg.report_dir.join(&report_name);

    if report_path.exists() {
        info!(report_path = %report_path.display(), "report already exists, nothing to do");
        return Ok(RunOutcome::ReportExists { report_path });
    }

    //--------------------------------------------------------------------------
    // Parse and aggregate (hard fail on IO and on a blown error budget)
    //--------------------------------------------------------------------------
    let lines = LogLines::open(&descriptor)?;
    let analysis = analyze_lines(lines, cfg.error_threshold)?;

    if analysis.records.is_empty() {
        warn!(file = %descriptor.path.display(), "log file has no parsed entries, no report will be created");
        return Ok(RunOutcome::EmptyLog {
            log_path: descriptor.path,
        });
    }

    info!(
        parsed = analysis.parsed(),
        errors = analysis.errors,
        urls = analysis.records.len(),
        "log file processed"
    );

    //--------------------------------------------------------------------------
    // Render
    //--------------------------------------------------------------------------
    let mut records = analysis.records;
    records.truncate(cfg.report_size);

    let template = ReportTemplate::from_config(cfg.report_template.as_deref());
    write_report(&records, &report_path, &template)?;

    info!(report_path = %report_path.display(), report_name = %report_name, "report created");

    Ok(RunOutcome::Generated {
        report_path,
        rows: records.len(),
    })
}
