use clap::{Parser, Subcommand};
use log_analyzer_core::cli;
use log_analyzer_core::cli::run::{RunOutcome, run_analysis};
use log_analyzer_core::conf::load_config;
use log_analyzer_core::ingest::AnalyzeError;
use log_analyzer_core::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "log-analyzer",
    version,
    about = "Per-url latency report from nginx access logs"
)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the latest log file and write its report (default)
    Run,

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { cmd }) => {
            if let Err(e) = cli::conf::run(&cmd, cli.config.as_deref()) {
                eprintln!("config error: {e:#}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }

        Some(Command::Run) | None => run(cli.config),
    }
}

fn run(config: Option<PathBuf>) -> ExitCode {
    let cfg = match load_config(config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not configured yet; fall back to stdout only.
            if init_logging(None).is_ok() {
                error!(error = %e, "failed to load configuration");
            } else {
                eprintln!("failed to load configuration: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_logging(cfg.structured_log_path.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    info!(config = ?cfg, "configuration loaded");

    match run_analysis(&cfg) {
        Ok(RunOutcome::Generated { report_path, rows }) => {
            info!(report_path = %report_path.display(), rows, "done");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<AnalyzeError>() {
                Some(AnalyzeError::ParseBudgetExceeded(budget)) => error!(
                    error_rate = budget.error_rate,
                    error_threshold = budget.error_threshold,
                    total_lines = budget.total_lines,
                    errors = budget.errors,
                    "log parsing failed"
                ),
                _ => error!(error = %format!("{e:#}"), "analysis failed"),
            }
            ExitCode::FAILURE
        }
    }
}
