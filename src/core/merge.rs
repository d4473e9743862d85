use crate::domain::model::{MergeReport, MergeWarning};
use crate::utils::error::Result;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn include_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Name runs to the closing quote, or to end of line if there is none.
    PATTERN.get_or_init(|| Regex::new(r#"^#include "([^"\r\n]*)"#).expect("valid include regex"))
}

/// Returns the header name of a local `#include "..."` line.
pub fn include_name(line: &str) -> Option<&str> {
    include_pattern()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Inlines local headers, and the `.c` files implementing them, into a
/// single translation unit.
#[derive(Debug, Clone)]
pub struct IncludeMerger {
    include_dir: PathBuf,
    library_dir: PathBuf,
}

#[derive(Default)]
struct MergeState {
    merged: String,
    seen: HashSet<String>,
    inlined: Vec<PathBuf>,
    warnings: Vec<MergeWarning>,
}

impl IncludeMerger {
    pub fn new(include_dir: impl Into<PathBuf>, library_dir: impl Into<PathBuf>) -> Self {
        Self {
            include_dir: include_dir.into(),
            library_dir: library_dir.into(),
        }
    }

    pub fn merge_str(&self, main_label: &str, content: &str) -> Result<MergeReport> {
        let mut state = MergeState::default();

        state
            .merged
            .push_str(&format!("//BEGIN MAIN FILE: {}\n", main_label));
        self.merge_lines(content, &mut state)?;
        state
            .merged
            .push_str(&format!("\n//END MAIN FILE: {}", main_label));

        Ok(MergeReport {
            merged_source: state.merged,
            inlined: state.inlined,
            warnings: state.warnings,
        })
    }

    pub fn merge_file(&self, main_path: &Path) -> Result<MergeReport> {
        let content = fs::read_to_string(main_path)?;
        self.merge_str(&main_path.display().to_string(), &content)
    }

    pub fn merge_into(&self, main_path: &Path, output_path: &Path) -> Result<MergeReport> {
        let report = self.merge_file(main_path)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, &report.merged_source)?;

        tracing::info!("Merged include files into: {}", output_path.display());
        Ok(report)
    }

    fn merge_lines(&self, content: &str, state: &mut MergeState) -> Result<()> {
        for line in content.split_inclusive('\n') {
            if line.trim().is_empty() {
                continue;
            }

            let Some(name) = include_name(line) else {
                state.merged.push_str(line);
                continue;
            };

            if !state.seen.insert(name.to_string()) {
                continue;
            }

            let header_path = self.include_dir.join(name);
            if !header_path.is_file() {
                tracing::warn!(
                    "Header file {} not found in {}",
                    header_path.display(),
                    self.include_dir.display()
                );
                state.warnings.push(MergeWarning::MissingHeader {
                    name: name.to_string(),
                    path: header_path,
                });
                continue;
            }
            self.inline_file("HEADER", &header_path, state)?;

            let companion = self.library_dir.join(Path::new(name).with_extension("c"));
            if !companion.is_file() {
                tracing::warn!(
                    "C file {} not found in {}",
                    companion.display(),
                    self.library_dir.display()
                );
                state.warnings.push(MergeWarning::MissingCompanion {
                    header: name.to_string(),
                    path: companion,
                });
                continue;
            }
            self.inline_file("C FILE", &companion, state)?;
        }
        Ok(())
    }

    fn inline_file(&self, kind: &str, path: &Path, state: &mut MergeState) -> Result<()> {
        let content = fs::read_to_string(path)?;
        tracing::debug!("Inlining {} {}", kind, path.display());

        state
            .merged
            .push_str(&format!("//BEGIN {}: {}\n", kind, path.display()));
        state.inlined.push(path.to_path_buf());
        self.merge_lines(&content, state)?;
        state
            .merged
            .push_str(&format!("\n//END {}: {}\n", kind, path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_include_name() {
        assert_eq!(include_name("#include \"list.h\"\n"), Some("list.h"));
        assert_eq!(include_name("#include \"util/io.h\" // io"), Some("util/io.h"));
        assert_eq!(include_name("#include \"open.h\n"), Some("open.h"));
        assert_eq!(include_name("#include <stdio.h>\n"), None);
        assert_eq!(include_name("  #include \"list.h\"\n"), None);
        assert_eq!(include_name("int x;\n"), None);
    }

    #[test]
    fn test_merge_without_local_includes() {
        let dir = TempDir::new().unwrap();
        let merger = IncludeMerger::new(dir.path().join("include"), dir.path());

        let report = merger
            .merge_str("main.c", "#include <stdio.h>\n\n   \nint main(void)\n{\n}\n")
            .unwrap();

        assert_eq!(
            report.merged_source,
            "//BEGIN MAIN FILE: main.c\n#include <stdio.h>\nint main(void)\n{\n}\n\n//END MAIN FILE: main.c"
        );
        assert!(report.inlined.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_header_is_warned_and_dropped() {
        let dir = TempDir::new().unwrap();
        let merger = IncludeMerger::new(dir.path().join("include"), dir.path());

        let report = merger
            .merge_str("main.c", "#include \"missing.h\"\nint x;\n")
            .unwrap();

        assert!(!report.merged_source.contains("missing.h"));
        assert!(report.merged_source.contains("int x;\n"));
        assert!(matches!(
            report.warnings.as_slice(),
            [MergeWarning::MissingHeader { name, .. }] if name == "missing.h"
        ));
    }
}
