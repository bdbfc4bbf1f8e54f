mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the TOML config file (falls back to the global --config)
        path: Option<PathBuf>,

        /// Print errors without hints
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

impl ConfigCmd {
    /// The file named on the subcommand, else the global `--config` file.
    pub fn config_path<'a>(&'a self, global: Option<&'a Path>) -> Option<&'a Path> {
        match self {
            ConfigCmd::Check { path, .. } | ConfigCmd::Dump { path, .. } => {
                path.as_deref().or(global)
            }
        }
    }
}

pub fn run(cmd: &ConfigCmd, global: Option<&Path>) -> anyhow::Result<()> {
    let path = cmd.config_path(global);
    match cmd {
        ConfigCmd::Check { plain, .. } => check(path, *plain),
        ConfigCmd::Dump { yaml, .. } => dump(path, *yaml),
    }
}
