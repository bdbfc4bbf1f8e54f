use crate::conf::{AnalyzerConfig, ConfigError, load_config_with_env, read_config_file};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

fn make_dirs(root: &Path) {
    fs::create_dir_all(root.join("logs")).unwrap();
    fs::create_dir_all(root.join("reports")).unwrap();
}

#[test]
fn loads_valid_config_relative_to_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    make_dirs(root);
    let path = root.join("config.toml");
    fs::write(
        &path,
        r#"
log_dir = "logs"
report_dir = "reports"
report_size = 50
error_threshold = 0.2
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config_with_env(Some(path.as_path()), no_env).unwrap();

    // Assert
    assert_eq!(
        cfg,
        AnalyzerConfig {
            log_dir: root.join("logs"),
            report_dir: root.join("reports"),
            report_size: 50,
            error_threshold: 0.2,
            ..AnalyzerConfig::default()
        }
    );
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = read_config_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.log_dir, dir.path().join("logs"));
    assert_eq!(cfg.report_dir, dir.path().join("reports"));
    assert_eq!(cfg.report_size, 1000);
    assert_eq!(cfg.error_threshold, 0.1);
    assert_eq!(cfg.log_file, None);
}

#[test]
fn absolute_paths_are_kept() {
    // Arrange
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!("log_dir = {:?}\n", elsewhere.path().to_str().unwrap()),
    )
    .unwrap();

    // Act
    let cfg = read_config_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.log_dir, elsewhere.path());
}

#[test]
fn missing_config_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    // Act
    let err = load_config_with_env(Some(path.as_path()), no_env).unwrap_err();

    // Assert
    match err {
        ConfigError::ReadFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_dir = [unclosed").unwrap();

    // Act
    let err = load_config_with_env(Some(path.as_path()), no_env).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "report_sise = 10\n").unwrap();

    // Act
    let err = read_config_file(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn negative_report_size_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "report_size = -5\n").unwrap();

    // Act
    let err = read_config_file(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn env_overrides_win_over_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    make_dirs(root);
    let path = root.join("config.toml");
    fs::write(&path, "report_size = 50\nerror_threshold = 0.2\n").unwrap();

    // Act
    let cfg = load_config_with_env(Some(path.as_path()), |name| match name {
        "LOG_ANALYZER_REPORT_SIZE" => Some("7".to_string()),
        _ => None,
    })
    .unwrap();

    // Assert
    assert_eq!(cfg.report_size, 7);
    assert_eq!(cfg.error_threshold, 0.2);
}

#[test]
fn validation_runs_after_overrides() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    make_dirs(root);
    let path = root.join("config.toml");
    fs::write(&path, "").unwrap();

    // Act
    let err = load_config_with_env(Some(path.as_path()), |name| {
        (name == "LOG_ANALYZER_ERROR_THRESHOLD").then(|| "1.5".to_string())
    })
    .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "error_threshold",
            ..
        }
    ));
}
