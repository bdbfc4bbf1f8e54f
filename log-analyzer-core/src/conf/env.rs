use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_PREFIX: &str = "LOG_ANALYZER_";

/// Applies `LOG_ANALYZER_*` overrides on top of `cfg`.
///
/// `lookup` receives the full variable name. Unset and empty variables leave
/// the value untouched.
pub fn apply_env_overrides<F>(mut cfg: AnalyzerConfig, lookup: F) -> Result<AnalyzerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| {
        let name = format!("{ENV_PREFIX}{suffix}");
        lookup(&name)
            .filter(|v| !v.trim().is_empty())
            .map(|v| (name, v))
    };

    if let Some((_, v)) = var("LOG_DIR") {
        cfg.log_dir = PathBuf::from(v);
    }
    if let Some((_, v)) = var("REPORT_DIR") {
        cfg.report_dir = PathBuf::from(v);
    }
    if let Some((_, v)) = var("LOG_FILE") {
        cfg.log_file = Some(PathBuf::from(v));
    }
    if let Some((name, v)) = var("REPORT_SIZE") {
        cfg.report_size = parse_env(name, v)?;
    }
    if let Some((name, v)) = var("ERROR_THRESHOLD") {
        cfg.error_threshold = parse_env(name, v)?;
    }
    if let Some((_, v)) = var("REPORT_TEMPLATE") {
        cfg.report_template = Some(PathBuf::from(v));
    }
    if let Some((_, v)) = var("STRUCTURED_LOG_PATH") {
        cfg.structured_log_path = Some(PathBuf::from(v));
    }

    Ok(cfg)
}

fn parse_env<T>(name: String, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnv {
            name,
            reason: e.to_string(),
            value,
        })
}
