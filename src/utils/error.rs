use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("File not found: {path}")]
    FileNotFoundError { path: String },

    #[error("Compilation of {source_path} failed:\n{stderr}")]
    CompileError { source_path: String, stderr: String },

    #[error("Could not run compiler '{command}': {reason}")]
    CompilerUnavailableError { command: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Build,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CfuError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputError { .. } | Self::FileNotFoundError { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::CompileError { .. } => ErrorCategory::Build,
            Self::IoError(_) | Self::CompilerUnavailableError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Build => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error, picked by severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputError { message } => format!("Invalid input: {}", message),
            Self::FileNotFoundError { path } => format!("The file {} does not exist.", path),
            Self::CompileError { stderr, .. } => format!("Build failed with error:\n{}", stderr),
            Self::CompilerUnavailableError { command, .. } => {
                format!("The compiler '{}' could not be started.", command)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("A filesystem operation failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputError { .. } => "Provide a single integer on standard input",
            Self::FileNotFoundError { .. } => "Check the path of the problem file",
            Self::CompileError { .. } => "Fix the reported compiler errors and rebuild",
            Self::CompilerUnavailableError { .. } => {
                "Install the compiler or set [compiler] command in cfu.toml"
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review cfu.toml and the command-line arguments"
            }
            Self::IoError(_) => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, CfuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(CfuError::input("abc").exit_code(), 1);
        assert_eq!(
            CfuError::CompileError {
                source_path: "a_merged.c".to_string(),
                stderr: "error".to_string(),
            }
            .exit_code(),
            2
        );
        let io = CfuError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            CfuError::input("x"),
            CfuError::FileNotFoundError { path: "a.c".to_string() },
            CfuError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "bad".to_string(),
            },
            CfuError::CompilerUnavailableError {
                command: "gcc".to_string(),
                reason: "not found".to_string(),
            },
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{:?}", err);
        }
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_compile_error_message_carries_stderr() {
        let err = CfuError::CompileError {
            source_path: "a_merged.c".to_string(),
            stderr: "a.c:1: expected ';'".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Build);
        assert!(err.user_friendly_message().contains("expected ';'"));
    }
}
