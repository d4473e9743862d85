use crate::domain::model::{CompileOutput, CompileRequest};
use crate::domain::ports::Compiler;
use crate::utils::error::{CfuError, Result};
use std::process::Command;

/// Runs the compiler as a child process and captures its stderr.
#[derive(Debug, Clone, Default)]
pub struct ProcessCompiler;

impl ProcessCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl Compiler for ProcessCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutput> {
        let args = request.args();
        tracing::debug!("Running {} {}", request.command, args.join(" "));

        let output = Command::new(&request.command)
            .args(&args)
            .output()
            .map_err(|e| CfuError::CompilerUnavailableError {
                command: request.command.clone(),
                reason: e.to_string(),
            })?;

        Ok(CompileOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_compiler_is_unavailable() {
        let request = CompileRequest {
            command: "cf-util-no-such-compiler".to_string(),
            source: PathBuf::from("a_merged.c"),
            output: PathBuf::from("a"),
            include_dir: PathBuf::from("include"),
            flags: Vec::new(),
        };

        assert!(matches!(
            ProcessCompiler::new().compile(&request),
            Err(CfuError::CompilerUnavailableError { .. })
        ));
    }
}
