mod env;
mod error;
mod loader;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use env::{ENV_PREFIX, apply_env_overrides};
pub use error::ConfigError;
pub use loader::{load_config, load_config_with_env, read_config_file};
pub use types::{
    AnalyzerConfig, DEFAULT_ERROR_THRESHOLD, DEFAULT_LOG_DIR, DEFAULT_REPORT_DIR,
    DEFAULT_REPORT_SIZE,
};
pub use validation::{RangeConstraint, validate_config, validate_range};
