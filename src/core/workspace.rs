use crate::core::merge::IncludeMerger;
use crate::domain::model::{BuildReport, CompileRequest};
use crate::domain::ports::{Compiler, ConfigProvider};
use crate::utils::error::{CfuError, Result};
use crate::utils::validation::validate_single_component;
use std::fs;
use std::path::{Path, PathBuf};

/// A problem-solving workspace: a problems tree, a shared C library with
/// its headers, and a build directory.
pub struct Workspace<C: ConfigProvider, K: Compiler> {
    config: C,
    compiler: K,
}

impl<C: ConfigProvider, K: Compiler> Workspace<C, K> {
    pub fn new(config: C, compiler: K) -> Self {
        Self { config, compiler }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Creates `<problems>/<name>`. Re-creating an existing problem is a no-op.
    pub fn new_problem(&self, name: &str) -> Result<PathBuf> {
        validate_single_component("problem_name", name)?;

        ensure_dir(self.config.problems_dir(), "problems")?;

        let problem_dir = self.config.problems_dir().join(name);
        fs::create_dir_all(&problem_dir)?;
        tracing::info!("Created new problem folder: {}", name);

        Ok(problem_dir)
    }

    /// Merges the problem file with its local includes and compiles the result.
    pub fn build(&self, problem_file: &Path) -> Result<BuildReport> {
        let problem_file = absolute(problem_file)?;
        if !problem_file.is_file() {
            return Err(CfuError::FileNotFoundError {
                path: problem_file.display().to_string(),
            });
        }

        ensure_dir(self.config.library_dir(), "library")?;
        ensure_dir(self.config.build_dir(), "build")?;

        let stem = problem_file
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CfuError::InvalidConfigValueError {
                field: "problem_file_path".to_string(),
                value: problem_file.display().to_string(),
                reason: "File name is not valid UTF-8".to_string(),
            })?;

        let build_dir = self.config.build_dir();
        let executable = build_dir.join(format!("{}{}", stem, std::env::consts::EXE_SUFFIX));
        let merged_source = build_dir.join(format!("{}_merged.c", stem));

        tracing::info!("Building file: {}", problem_file.display());

        let merger = IncludeMerger::new(self.config.include_dir(), self.config.library_dir());
        let merge = merger.merge_into(&problem_file, &merged_source)?;

        let request = CompileRequest {
            command: self.config.compiler_command().to_string(),
            source: merged_source.clone(),
            output: executable.clone(),
            include_dir: self.config.include_dir().to_path_buf(),
            flags: self.config.compiler_flags().to_vec(),
        };

        let output = self.compiler.compile(&request)?;
        if !output.success {
            return Err(CfuError::CompileError {
                source_path: merged_source.display().to_string(),
                stderr: output.stderr,
            });
        }

        tracing::info!("Build successful: {}", executable.display());
        Ok(BuildReport {
            merged_source,
            executable,
            warnings: merge.warnings,
        })
    }
}

fn ensure_dir(path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        tracing::info!("Created {} directory: {}", label, path.display());
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
