//! Exit codes for CLI wrappers around the analysis pipeline.
//!
//! Load failure, validation failure, and a missing external module map to
//! distinct non-zero codes so wrappers can branch on the outcome without
//! parsing output.

use crate::calculator::{AnalysisError, ComputationError};
use rth_config::ConfigError;

/// Stable exit codes for reactor analysis operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Clean = 0,

    /// Configuration could not be loaded (missing file, bad format,
    /// schema mismatch).
    LoadError = 10,

    /// Configuration loaded but failed validation.
    ValidationError = 11,

    /// The external calculator module is not available.
    CalculatorMissing = 12,

    /// The external calculator ran but the computation failed.
    ComputationError = 13,

    /// I/O error.
    IoError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_error(self) -> bool {
        self != ExitCode::Clean
    }

    /// Stable code name for machine-readable output.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::LoadError => "ERR_LOAD",
            ExitCode::ValidationError => "ERR_VALIDATION",
            ExitCode::CalculatorMissing => "ERR_NO_CALCULATOR",
            ExitCode::ComputationError => "ERR_COMPUTE",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ValidationFailed { .. } => ExitCode::ValidationError,
            ConfigError::Io { .. } => ExitCode::IoError,
            _ => ExitCode::LoadError,
        }
    }
}

impl From<&AnalysisError> for ExitCode {
    fn from(err: &AnalysisError) -> Self {
        match err {
            AnalysisError::Validation(config_err) => ExitCode::from(config_err),
            AnalysisError::Computation(ComputationError::Unavailable(_)) => {
                ExitCode::CalculatorMissing
            }
            AnalysisError::Computation(ComputationError::Failed(_)) => ExitCode::ComputationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_outcomes_map_to_distinct_codes() {
        let load = ExitCode::from(&ConfigError::FileNotFound {
            path: PathBuf::from("reactor.yaml"),
        });
        let validation = ExitCode::from(&ConfigError::ValidationFailed { messages: vec![] });
        let missing = ExitCode::from(&AnalysisError::Computation(ComputationError::Unavailable(
            "not installed".to_string(),
        )));

        assert_eq!(load, ExitCode::LoadError);
        assert_eq!(validation, ExitCode::ValidationError);
        assert_eq!(missing, ExitCode::CalculatorMissing);

        let codes = [load.as_i32(), validation.as_i32(), missing.as_i32()];
        assert!(codes.iter().all(|&c| c != 0));
        assert_eq!(
            codes.len(),
            codes.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }

    #[test]
    fn test_clean_is_zero_and_not_an_error() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert!(!ExitCode::Clean.is_error());
        assert!(ExitCode::LoadError.is_error());
    }

    #[test]
    fn test_display_includes_name_and_code() {
        assert_eq!(ExitCode::ValidationError.to_string(), "ERR_VALIDATION (11)");
    }

    #[test]
    fn test_schema_errors_count_as_load_failures() {
        let err = ConfigError::UnknownField("foo".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::LoadError);
    }
}
