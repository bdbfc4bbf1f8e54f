use crate::conf::{ConfigError, load_config};
use std::path::Path;

pub fn check(path: Option<&Path>, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ log_dir: {}", cfg.log_dir.display());
            println!("✔ report_dir: {}", cfg.report_dir.display());
            if let Some(log_file) = &cfg.log_file {
                println!("✔ log_file: {}", log_file.display());
            }
            println!("✔ report_size: {}", cfg.report_size);
            println!("✔ error_threshold: {}", cfg.error_threshold);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    eprintln!("{}", err);
    if plain {
        return;
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::OutOfRange {
            field: "error_threshold",
            ..
        } => Some(
            "error_threshold is a fraction of unparseable lines, not a percentage.\n\
             \n\
             Example:\n\
             \n\
             error_threshold = 0.1",
        ),

        ConfigError::OutOfRange {
            field: "report_size",
            ..
        } => Some(
            "report_size is the number of urls kept in the report and must be positive.\n\
             \n\
             Example:\n\
             \n\
             report_size = 1000",
        ),

        ConfigError::MissingDirectory { .. } => Some(
            "Relative directories are resolved against the config file's directory,\n\
             or against the working directory when no config file is given.\n\
             \n\
             Create the directory or point the setting at an existing one.",
        ),

        ConfigError::UnrecognizedLogFile { .. } => Some(
            "The report is named after the date in the log file name.\n\
             \n\
             Rename the file to nginx-access-ui.log-YYYYMMDD (optionally .gz).",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
