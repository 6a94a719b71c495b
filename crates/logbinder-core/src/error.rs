//! Error types for the logging facade

use std::path::PathBuf;

use thiserror::Error;

use crate::ConsoleTarget;

/// Result type used across the facade
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors raised by loggers, factories and the registry
#[derive(Debug, Error)]
pub enum LogError {
    /// A required argument was empty or missing
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// A backend failed to write
    #[error("failed to write log entry to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The console backend failed to write
    #[error("failed to write log entry to {target}: {source}")]
    Console {
        target: ConsoleTarget,
        #[source]
        source: std::io::Error,
    },

    /// The message template could not be combined with its arguments
    #[error("invalid format template {template:?}: {reason}")]
    Format { template: String, reason: String },

    /// One or more children of a continue-on-error composite failed
    #[error("{} of the composite's backends failed: {}", .0.len(), summarize(.0))]
    FanOut(Vec<ChildFailure>),

    /// Configuration could not be parsed or applied
    #[error("logging configuration error: {0}")]
    Config(String),
}

impl LogError {
    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// A single child failure recorded by a composite logger
#[derive(Debug)]
pub struct ChildFailure {
    /// Position of the child in the flattened list
    pub index: usize,
    /// The child's `Logger::name`
    pub backend: String,
    pub error: LogError,
}

fn summarize(failures: &[ChildFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("#{} {} ({})", f.index, f.backend, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}
