use cf_util::problems::watermelon;
use cf_util::utils::{logger, validation::Validate};
use cf_util::{CfuError, CliConfig, Command, ProcessCompiler, Workspace, WorkspaceConfig};
use clap::Parser;
use std::io;
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ cf-util failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: CliConfig) -> cf_util::Result<()> {
    match config.command {
        Command::Solve => {
            watermelon::solve(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::New { problem_name } => {
            let workspace = open_workspace(config.config.as_deref())?;
            let problem_dir = workspace.new_problem(&problem_name)?;
            println!("Created new problem folder: {}", problem_dir.display());
        }
        Command::Build { problem_file_path } => {
            let workspace = open_workspace(config.config.as_deref())?;
            let report = workspace.build(&problem_file_path)?;
            for warning in &report.warnings {
                eprintln!("⚠️  {:?}", warning);
            }
            println!("📄 Merged source: {}", report.merged_source.display());
            println!("✅ Build successful: {}", report.executable.display());
        }
    }
    Ok(())
}

fn open_workspace(
    config_path: Option<&Path>,
) -> Result<Workspace<WorkspaceConfig, ProcessCompiler>, CfuError> {
    let config = WorkspaceConfig::load(config_path)?;
    config.validate()?;

    Ok(Workspace::new(config, ProcessCompiler::new()))
}
