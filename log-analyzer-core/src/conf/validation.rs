use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use crate::ingest::LogFileDescriptor;
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
}

pub const ERROR_THRESHOLD: RangeConstraint<f64> = RangeConstraint {
    min: 0.0,
    max: 1.0,
    label: "error_threshold",
};

pub const REPORT_SIZE: RangeConstraint<usize> = RangeConstraint {
    min: 1,
    max: 1_000_000,
    label: "report_size",
};

/// Rejects values outside `[min, max]`, including NaN.
pub fn validate_range<T>(value: T, constraint: &RangeConstraint<T>) -> Result<(), ConfigError>
where
    T: PartialOrd + Display + Copy,
{
    if (constraint.min..=constraint.max).contains(&value) {
        return Ok(());
    }

    Err(ConfigError::OutOfRange {
        field: constraint.label,
        value: value.to_string(),
        min: constraint.min.to_string(),
        max: constraint.max.to_string(),
    })
}

pub fn validate_config(cfg: &AnalyzerConfig) -> Result<(), ConfigError> {
    validate_range(cfg.error_threshold, &ERROR_THRESHOLD)?;
    validate_range(cfg.report_size, &REPORT_SIZE)?;

    validate_dir(&cfg.log_dir, "log_dir")?;
    validate_dir(&cfg.report_dir, "report_dir")?;

    if let Some(log_file) = &cfg.log_file {
        validate_file(log_file, "log_file")?;
        if LogFileDescriptor::from_path(log_file).is_none() {
            return Err(ConfigError::UnrecognizedLogFile {
                path: log_file.clone(),
            });
        }
    }

    if let Some(template) = &cfg.report_template {
        validate_file(template, "report_template")?;
    }

    Ok(())
}

fn validate_dir(path: &Path, field: &'static str) -> Result<(), ConfigError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::MissingDirectory {
            field,
            path: path.to_path_buf(),
        })
    }
}

fn validate_file(path: &Path, field: &'static str) -> Result<(), ConfigError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::MissingFile {
            field,
            path: path.to_path_buf(),
        })
    }
}
