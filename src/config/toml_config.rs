use crate::core::ConfigProvider;
use crate::utils::error::{CfuError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "cfu.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub compiler: CompilerConfig,
    pub paths: PathsConfig,
    #[serde(skip)]
    include_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub command: String,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub problems: PathBuf,
    pub library: PathBuf,
    /// Defaults to `<library>/include`.
    pub include: Option<PathBuf>,
    pub build: PathBuf,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: "gcc".to_string(),
            flags: Vec::new(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            problems: PathBuf::from("./problems"),
            library: PathBuf::from("./lib"),
            include: None,
            build: PathBuf::from("./build"),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            compiler: CompilerConfig::default(),
            paths: PathsConfig::default(),
            include_dir: PathBuf::new(),
        }
        .resolved()
    }
}

impl WorkspaceConfig {
    /// Default layout with every directory placed under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        let mut config = Self::default();
        config.paths.problems = root.join("problems");
        config.paths.library = root.join("lib");
        config.paths.build = root.join("build");
        config.resolved()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CfuError::FileNotFoundError {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(CfuError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given. Otherwise loads `cfu.toml` from the working
    /// directory when present, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_in(Path::new("."), path)
    }

    /// Like [`WorkspaceConfig::load`], looking for `cfu.toml` in `dir`.
    pub fn load_in(dir: &Path, path: Option<&Path>) -> Result<Self> {
        let default_file = dir.join(DEFAULT_CONFIG_FILE);
        match path {
            Some(path) => Self::from_file(path),
            None if default_file.is_file() => Self::from_file(&default_file),
            None => {
                tracing::debug!("No {} found, using default workspace layout", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| CfuError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(config.resolved())
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CfuError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn resolved(mut self) -> Self {
        self.include_dir = match &self.paths.include {
            Some(include) => include.clone(),
            None => self.paths.library.join("include"),
        };
        self
    }
}

impl ConfigProvider for WorkspaceConfig {
    fn compiler_command(&self) -> &str {
        &self.compiler.command
    }

    fn compiler_flags(&self) -> &[String] {
        &self.compiler.flags
    }

    fn problems_dir(&self) -> &Path {
        &self.paths.problems
    }

    fn library_dir(&self) -> &Path {
        &self.paths.library
    }

    fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    fn build_dir(&self) -> &Path {
        &self.paths.build
    }
}

impl Validate for WorkspaceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("compiler.command", &self.compiler.command)?;
        for flag in &self.compiler.flags {
            validate_non_empty_string("compiler.flags", flag)?;
        }

        validate_path("paths.problems", &self.paths.problems.to_string_lossy())?;
        validate_path("paths.library", &self.paths.library.to_string_lossy())?;
        validate_path("paths.include", &self.include_dir.to_string_lossy())?;
        validate_path("paths.build", &self.paths.build.to_string_lossy())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = WorkspaceConfig::from_toml_str("").unwrap();
        assert_eq!(config.compiler_command(), "gcc");
        assert!(config.compiler_flags().is_empty());
        assert_eq!(config.problems_dir(), Path::new("./problems"));
        assert_eq!(config.include_dir(), Path::new("./lib/include"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[compiler]
command = "clang"
flags = ["-O2", "-Wall"]

[paths]
problems = "./cf"
library = "./common"
include = "./headers"
build = "./out"
"#;

        let config = WorkspaceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.compiler_command(), "clang");
        assert_eq!(config.compiler_flags(), ["-O2", "-Wall"]);
        assert_eq!(config.library_dir(), Path::new("./common"));
        assert_eq!(config.include_dir(), Path::new("./headers"));
        assert_eq!(config.build_dir(), Path::new("./out"));
    }

    #[test]
    fn test_include_follows_library() {
        let config = WorkspaceConfig::from_toml_str("[paths]\nlibrary = \"./common\"\n").unwrap();
        assert_eq!(config.include_dir(), Path::new("./common/include"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CFU_TEST_COMPILER", "tcc");

        let config = WorkspaceConfig::from_toml_str(
            "[compiler]\ncommand = \"${CFU_TEST_COMPILER}\"\nflags = [\"${CFU_TEST_UNSET_FLAG}\"]\n",
        )
        .unwrap();
        assert_eq!(config.compiler_command(), "tcc");
        assert_eq!(config.compiler_flags(), ["${CFU_TEST_UNSET_FLAG}"]);
    }

    #[test]
    fn test_config_validation() {
        let config = WorkspaceConfig::from_toml_str("[compiler]\ncommand = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CfuError::InvalidConfigValueError { field, .. }) if field == "compiler.command"
        ));

        let config = WorkspaceConfig::from_toml_str("[paths]\nbuild = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            WorkspaceConfig::from_toml_str("[compiler\ncommand ="),
            Err(CfuError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_load_without_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();

        let config = WorkspaceConfig::load_in(dir.path(), None).unwrap();
        assert_eq!(config.compiler_command(), "gcc");
        assert_eq!(config.build_dir(), Path::new("./build"));

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[compiler]\ncommand = \"clang\"\n",
        )
        .unwrap();
        let config = WorkspaceConfig::load_in(dir.path(), None).unwrap();
        assert_eq!(config.compiler_command(), "clang");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[compiler]\nflags = [\"-std=c11\"]\n")
            .unwrap();

        let config = WorkspaceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.compiler_flags(), ["-std=c11"]);

        assert!(matches!(
            WorkspaceConfig::load(Some(Path::new("/nonexistent/cfu.toml"))),
            Err(CfuError::FileNotFoundError { .. })
        ));
    }
}
