// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod input;
pub mod io;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    FactorScores, HealthMetrics, MetricKind, RiskBreakdown, RiskCategory, RiskResult,
};

pub use crate::errors::VitalRiskError;

pub use crate::input::{collect_metrics, validate, MetricOverrides, RangeIssue, ValidationPolicy};

pub use crate::io::output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};

pub use crate::risk::{compute_risk, FactorContribution, RiskScorer};
