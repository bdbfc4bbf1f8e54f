use crate::conf::env::apply_env_overrides;
use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use crate::conf::validation::validate_config;
use std::fs;
use std::path::Path;

/// Loads, overrides from the process environment, and validates the
/// configuration.
///
/// Without a config file the defaults apply, relative to the working
/// directory.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    load_config_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_config_with_env<F>(path: Option<&Path>, lookup: F) -> Result<AnalyzerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let cfg = match path {
        Some(path) => read_config_file(path)?,
        None => AnalyzerConfig::default(),
    };

    //--------------------------------------------------------------------------
    // Environment wins over the file
    //--------------------------------------------------------------------------
    let cfg = apply_env_overrides(cfg, lookup)?;

    validate_config(&cfg)?;
    Ok(cfg)
}

/// Parses a TOML config file. Relative paths inside it are taken relative to
/// the file's own directory.
pub fn read_config_file(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: AnalyzerConfig = toml::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    let base = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    Ok(cfg.resolve_paths(base))
}
