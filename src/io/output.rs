use crate::core::{HealthMetrics, RiskResult};
use crate::errors::VitalRiskError;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::risk::{FactorContribution, RiskScorer};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

pub const DISCLAIMER: &str = "This is not a medical diagnosis. The risk score is based on a simulated algorithm using the data you provided. Please consult a qualified healthcare professional for proper medical advice and diagnosis.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, VitalRiskError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "terminal" | "text" => Ok(Self::Terminal),
            other => Err(VitalRiskError::Config(format!(
                "unknown output format '{other}' (expected json, markdown or terminal)"
            ))),
        }
    }
}

/// Per-factor detail attached to a report on request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Sum of sub-scores before normalization
    pub raw_total: u32,
    pub factors: Vec<FactorContribution>,
}

impl Explanation {
    pub fn from_contributions(factors: Vec<FactorContribution>) -> Self {
        Self {
            raw_total: factors.iter().map(|f| f.score).sum(),
            factors,
        }
    }
}

/// Everything a renderer needs to present one assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub metrics: HealthMetrics,
    pub result: RiskResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
    pub disclaimer: &'static str,
}

impl AssessmentReport {
    pub fn new(metrics: HealthMetrics, result: RiskResult) -> Self {
        Self {
            generated_at: Utc::now(),
            metrics,
            result,
            explanation: None,
            disclaimer: DISCLAIMER,
        }
    }

    /// Score `metrics` and build a report, optionally with factor detail.
    pub fn assess(scorer: &RiskScorer, metrics: HealthMetrics, explain: bool) -> Self {
        let result = scorer.compute_risk(&metrics);
        let report = Self::new(metrics, result);
        if explain {
            report.with_explanation(Explanation::from_contributions(scorer.explain(&metrics)))
        } else {
            report
        }
    }

    pub fn with_explanation(mut self, explanation: Explanation) -> Self {
        self.explanation = Some(explanation);
        self
    }
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
