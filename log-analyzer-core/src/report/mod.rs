mod error;
mod render;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use render::{ReportTemplate, render_report, report_file_name, write_report};
