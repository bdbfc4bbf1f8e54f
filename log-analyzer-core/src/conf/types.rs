use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_REPORT_DIR: &str = "reports";
pub const DEFAULT_REPORT_SIZE: usize = 1000;
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Directory scanned for `nginx-access-ui.log-*` files.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Analyze this file instead of the latest one in `log_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Maximum number of urls in the report.
    #[serde(default = "default_report_size")]
    pub report_size: usize,

    /// Highest tolerated fraction of unparseable lines, in `[0, 1]`.
    #[serde(default = "default_error_threshold")]
    pub error_threshold: f64,

    /// HTML template containing a `$table_json` placeholder. The built-in
    /// template is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,

    /// Optional file that receives a copy of the JSON log output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_log_path: Option<PathBuf>,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_DIR)
}

fn default_report_size() -> usize {
    DEFAULT_REPORT_SIZE
}

fn default_error_threshold() -> f64 {
    DEFAULT_ERROR_THRESHOLD
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            report_dir: default_report_dir(),
            log_file: None,
            report_size: default_report_size(),
            error_threshold: default_error_threshold(),
            report_template: None,
            structured_log_path: None,
        }
    }
}

impl AnalyzerConfig {
    /// Makes every relative path absolute against `base`.
    pub(crate) fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

        self.log_dir = resolve(self.log_dir);
        self.report_dir = resolve(self.report_dir);
        self.log_file = self.log_file.map(resolve);
        self.report_template = self.report_template.map(resolve);
        self.structured_log_path = self.structured_log_path.map(resolve);
        self
    }
}
