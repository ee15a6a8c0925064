//! Error types and exit codes for evalview
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing results file, invalid payload, failed validation)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed results (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during evalview operations
#[derive(Error, Debug)]
pub enum EvalError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("results file not found: {path:?}")]
    ResultsNotFound { path: PathBuf },

    #[error("invalid results payload in {source_name}: {field}: {reason}")]
    InvalidPayload {
        source_name: String,
        field: String,
        reason: String,
    },

    #[error("validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl EvalError {
    /// Create an error for a payload that failed to decode at a specific JSON path
    pub fn invalid_payload(
        source_name: impl std::fmt::Display,
        field: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        let field = field.to_string();
        EvalError::InvalidPayload {
            source_name: source_name.to_string(),
            // serde_path_to_error renders the document root as "."
            field: if field.is_empty() || field == "." {
                "<root>".to_string()
            } else {
                field
            },
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        EvalError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        EvalError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        EvalError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        EvalError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            EvalError::UnknownFormat(_)
            | EvalError::DuplicateFormat
            | EvalError::UsageError(_)
            | EvalError::InvalidValue { .. }
            | EvalError::Unsupported { .. } => ExitCode::Usage,

            // Data errors
            EvalError::ResultsNotFound { .. }
            | EvalError::InvalidPayload { .. }
            | EvalError::ValidationFailed { .. }
            | EvalError::NotFound { .. } => ExitCode::Data,

            // Generic failures
            EvalError::Io(_)
            | EvalError::Json(_)
            | EvalError::Toml(_)
            | EvalError::FailedOperationWithTarget { .. }
            | EvalError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            EvalError::UnknownFormat(_) => "unknown_format",
            EvalError::DuplicateFormat => "duplicate_format",
            EvalError::UsageError(_) => "usage_error",
            EvalError::ResultsNotFound { .. } => "results_not_found",
            EvalError::InvalidPayload { .. } => "invalid_payload",
            EvalError::ValidationFailed { .. } => "validation_failed",
            EvalError::Io(_) => "io_error",
            EvalError::Json(_) => "json_error",
            EvalError::Toml(_) => "toml_error",
            EvalError::InvalidValue { .. } => "invalid_value",
            EvalError::NotFound { .. } => "not_found",
            EvalError::Unsupported { .. } => "unsupported",
            EvalError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            EvalError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let EvalError::InvalidPayload { field, .. } = self {
            error_obj["field"] = serde_json::json!(field);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for evalview operations
pub type Result<T> = std::result::Result<T, EvalError>;
