use crate::config::{self, VitalRiskConfig};
use crate::formatting::{resolve_color_mode, ColorMode};
use crate::input::{self, MetricOverrides, ValidationPolicy};
use crate::io::{self, create_writer, AssessmentReport, OutputFormat};
use crate::risk::RiskScorer;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AssessConfig {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: MetricOverrides,
    pub strict: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub color: Option<ColorMode>,
    /// Attach per-factor contributions to every report
    pub explain: bool,
}

pub fn handle_assess(config: AssessConfig) -> Result<()> {
    let settings = load_settings(config.config.as_ref())?;
    let policy = resolve_policy(config.strict, &settings);
    let format = resolve_format(config.format, &settings)?;

    // Files never get ANSI escapes.
    let plain = config.plain || config.output.is_some();
    resolve_color_mode(plain, config.color, settings.use_color()).apply();

    let records = input::collect_metrics(config.input.as_deref(), &config.overrides)
        .context("Failed to collect health metrics")?;
    let reports = assess_records(&records, policy, config.explain)?;

    let destination = io::open_destination(config.output.as_deref())?;
    create_writer(format, destination).write_reports(&reports)?;

    if let Some(path) = &config.output {
        log::info!("Wrote {} report(s) to {}", reports.len(), path.display());
    }
    Ok(())
}

/// Validate and score every record, failing on the first record rejected by
/// a strict policy.
pub fn assess_records(
    records: &[crate::core::HealthMetrics],
    policy: ValidationPolicy,
    explain: bool,
) -> Result<Vec<AssessmentReport>> {
    let scorer = RiskScorer::new();
    records
        .iter()
        .enumerate()
        .map(|(index, metrics)| {
            input::enforce(metrics, policy)
                .with_context(|| format!("Record {} of {} rejected", index + 1, records.len()))?;
            let report = AssessmentReport::assess(&scorer, *metrics, explain);
            log::debug!(
                "Record {}: score {} ({})",
                index + 1,
                report.result.score,
                report.result.category
            );
            Ok(report)
        })
        .collect()
}

fn load_settings(explicit: Option<&PathBuf>) -> Result<VitalRiskConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

fn resolve_policy(strict: bool, settings: &VitalRiskConfig) -> ValidationPolicy {
    if strict {
        ValidationPolicy::Strict
    } else {
        settings.validation_policy()
    }
}

fn resolve_format(requested: Option<OutputFormat>, settings: &VitalRiskConfig) -> Result<OutputFormat> {
    match (requested, settings.default_format()) {
        (Some(format), _) => Ok(format),
        (None, Some(configured)) => Ok(OutputFormat::parse(configured)?),
        (None, None) => Ok(OutputFormat::Terminal),
    }
}
