use flate2::Compression;
use flate2::write::GzEncoder;
use log_analyzer_core::conf::AnalyzerConfig;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One well-formed access log line.
pub struct LogLine<'a> {
    pub url: &'a str,
    pub request_time: f64,
}

impl<'a> LogLine<'a> {
    pub fn new(url: &'a str, request_time: f64) -> Self {
        Self { url, request_time }
    }

    pub fn render(&self) -> String {
        format!(
            "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {} HTTP/1.1\" 200 927 \"-\" \
             \"Lynx/2.8.8dev.9 libwww-FM/2.14\" \"-\" \"1498697422-2190034393-4708-9752759\" \
             \"dc7161be3\" {:.3}",
            self.url, self.request_time
        )
    }
}

/// Temporary `logs/` + `reports/` pair with a config pointing at it.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("logs")).unwrap();
        fs::create_dir(dir.path().join("reports")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("logs")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    /// `date` is in report form, e.g. `2017.06.30`.
    pub fn report_path(&self, date: &str) -> PathBuf {
        self.report_dir().join(format!("report-{date}.html"))
    }

    /// Config whose template renders to the bare JSON table.
    pub fn config(&self) -> AnalyzerConfig {
        let template = self.root().join("table.tmpl");
        fs::write(&template, "$table_json").unwrap();

        AnalyzerConfig {
            log_dir: self.log_dir(),
            report_dir: self.report_dir(),
            report_template: Some(template),
            ..AnalyzerConfig::default()
        }
    }

    pub fn write_plain(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        fs::write(&path, join_lines(lines)).unwrap();
        path
    }

    pub fn write_gz(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(join_lines(lines).as_bytes()).unwrap();
        encoder.finish().unwrap();
        path
    }

    pub fn read_report(&self, date: &str) -> serde_json::Value {
        let raw = fs::read_to_string(self.report_path(date)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
