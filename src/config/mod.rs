pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cf-util")]
#[command(about = "Codeforces problem management utility")]
#[command(after_help = "Use cf-util <command> --help for detailed help on each command")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace configuration file (defaults to ./cfu.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a new problem folder
    New {
        /// Name of the new problem folder
        problem_name: String,
    },
    /// Build the problem file
    Build {
        /// Path to the file to build
        problem_file_path: PathBuf,
    },
    /// Answer 4A Watermelon for an integer read from stdin
    Solve,
}
