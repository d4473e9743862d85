use std::fmt;
use std::path::PathBuf;

/// Answer printed by a yes/no problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::No => "NO",
        }
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeWarning {
    MissingHeader { name: String, path: PathBuf },
    MissingCompanion { header: String, path: PathBuf },
}

#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub merged_source: String,
    /// Headers and companion files in the order they were inlined.
    pub inlined: Vec<PathBuf>,
    pub warnings: Vec<MergeWarning>,
}

#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub command: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub include_dir: PathBuf,
    pub flags: Vec<String>,
}

impl CompileRequest {
    /// Arguments after the command itself: `<source> -o <output> -I <include> <flags...>`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.source.display().to_string(),
            "-o".to_string(),
            self.output.display().to_string(),
            "-I".to_string(),
            self.include_dir.display().to_string(),
        ];
        args.extend(self.flags.iter().cloned());
        args
    }
}

#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub success: bool,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub merged_source: PathBuf,
    pub executable: PathBuf,
    pub warnings: Vec<MergeWarning>,
}
