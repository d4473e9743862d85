pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod problems;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::compiler::ProcessCompiler;
pub use config::toml_config::WorkspaceConfig;
pub use crate::core::{merge::IncludeMerger, workspace::Workspace};
pub use domain::model::Verdict;
pub use utils::error::{CfuError, Result};
