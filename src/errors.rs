//! Error types for the outer surfaces of vitalrisk.
//!
//! Scoring itself is total and never fails; these errors cover reading
//! input records, loading configuration and strict range validation.

use crate::input::validation::RangeIssue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VitalRiskError {
    /// File system related errors
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input record could not be decoded
    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Strict-mode range validation failures, all of them
    #[error("{} metric(s) outside the accepted range: {}", .0.len(), summarize(.0))]
    Validation(Vec<RangeIssue>),
}

impl VitalRiskError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.to_string(),
        }
    }
}

fn summarize(issues: &[RangeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, VitalRiskError>;
