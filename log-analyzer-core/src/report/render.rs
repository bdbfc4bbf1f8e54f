use crate::report::error::ReportError;
use crate::stats::UrlStatisticRecord;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

const BUILTIN_TEMPLATE: &str = include_str!("template.html");

/// `$table_json` or `${table_json}`, but not `$table_json_extra`. `$$` is the
/// escape for a literal `$` and is matched first.
static TABLE_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:(?P<escaped>\$)|\{table_json\}|table_json\b)")
        .expect("placeholder pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTemplate {
    Builtin,
    File(PathBuf),
}

impl ReportTemplate {
    pub fn from_config(path: Option<&Path>) -> Self {
        match path {
            Some(p) => ReportTemplate::File(p.to_path_buf()),
            None => ReportTemplate::Builtin,
        }
    }

    pub fn load(&self) -> Result<Cow<'static, str>, ReportError> {
        match self {
            ReportTemplate::Builtin => Ok(Cow::Borrowed(BUILTIN_TEMPLATE)),
            ReportTemplate::File(path) => {
                if !path.exists() {
                    error!(path = %path.display(), "report template not found");
                    return Err(ReportError::TemplateMissing { path: path.clone() });
                }
                fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| ReportError::ReadTemplate {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

/// `report-YYYY.MM.DD.html` for the log's embedded date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("report-{}.html", date.format("%Y.%m.%d"))
}

/// Substitutes the records, as a pretty-printed JSON array, for every table
/// placeholder in `template` and collapses `$$` to `$`. Any other `$` text,
/// including unknown placeholders, is kept verbatim.
pub fn render_report(
    template: &str,
    records: &[UrlStatisticRecord],
) -> Result<String, ReportError> {
    let table_json = serde_json::to_string_pretty(records)?;
    Ok(TABLE_JSON
        .replace_all(template, |caps: &Captures<'_>| {
            if caps.name("escaped").is_some() {
                "$"
            } else {
                table_json.as_str()
            }
        })
        .into_owned())
}

/// Renders and writes the report.
///
/// The file is written next to its destination and renamed into place, so
/// `report_path` either does not exist or holds a complete report.
pub fn write_report(
    records: &[UrlStatisticRecord],
    report_path: &Path,
    template: &ReportTemplate,
) -> Result<(), ReportError> {
    let html = render_report(&template.load()?, records)?;

    let write_err = |source| ReportError::Write {
        path: report_path.to_path_buf(),
        source,
    };

    let dir = match report_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(html.as_bytes()).map_err(write_err)?;
    tmp.persist(report_path).map_err(|e| write_err(e.error))?;

    info!(report_path = %report_path.display(), rows = records.len(), "report saved");
    Ok(())
}
