//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, malformed graph file)
//!
//! Search exhaustion is not an error: the search entry points return `None`
//! when no goal is reachable.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or running commands
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: {1})")]
    UnknownAlgorithm(String, &'static str),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for a vertex label that is absent from the graph
    pub fn vertex_not_found(label: impl std::fmt::Display) -> Self {
        GraphwalkError::VertexNotFound {
            label: label.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::NotFound {
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
        GraphwalkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        GraphwalkError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UnknownAlgorithm(..)
            | GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidValue { .. }
            | GraphwalkError::Unsupported { .. } => ExitCode::Usage,

            GraphwalkError::VertexNotFound { .. }
            | GraphwalkError::NotFound { .. }
            | GraphwalkError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphwalkError::Io(_)
            | GraphwalkError::Yaml(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::FailedOperation { .. }
            | GraphwalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UnknownAlgorithm(..) => "unknown_algorithm",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::Unsupported { .. } => "unsupported",
            GraphwalkError::VertexNotFound { .. } => "vertex_not_found",
            GraphwalkError::NotFound { .. } => "not_found",
            GraphwalkError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Yaml(_) => "yaml_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::FailedOperation { .. } => "failed_operation",
            GraphwalkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
