//! Range checks matching the assessment form's input affordances.
//!
//! The scorer accepts anything; these checks exist for callers that want to
//! flag values the form itself would never produce.

use crate::core::{HealthMetrics, MetricKind};
use crate::errors::{Result, VitalRiskError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    pub metric: MetricKind,
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    const fn new(metric: MetricKind, min: f64, max: f64) -> Self {
        Self { metric, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Meaningful domain of every numeric metric. Family history is boolean and
/// has no range.
pub const FORM_RANGES: [MetricRange; 8] = [
    MetricRange::new(MetricKind::Age, 18.0, 100.0),
    MetricRange::new(MetricKind::Bmi, 10.0, 60.0),
    MetricRange::new(MetricKind::BloodPressure, 90.0, 180.0),
    MetricRange::new(MetricKind::Hba1c, 4.0, 14.0),
    MetricRange::new(MetricKind::Cholesterol, 100.0, 400.0),
    MetricRange::new(MetricKind::SleepHours, 3.0, 12.0),
    MetricRange::new(MetricKind::DailySteps, 0.0, 30_000.0),
    MetricRange::new(MetricKind::StressLevel, 1.0, 10.0),
];

pub fn range_for(metric: MetricKind) -> Option<&'static MetricRange> {
    FORM_RANGES.iter().find(|range| range.metric == metric)
}

/// A single metric outside its meaningful domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeIssue {
    pub metric: MetricKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl RangeIssue {
    pub fn new(metric: MetricKind, value: f64) -> Self {
        let (min, max) = range_for(metric)
            .map(|range| (range.min, range.max))
            .unwrap_or((f64::NEG_INFINITY, f64::INFINITY));
        Self {
            metric,
            value,
            min,
            max,
        }
    }
}

impl fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_finite() {
            write!(
                f,
                "{}={} (expected {}-{})",
                self.metric.field_name(),
                self.value,
                self.min,
                self.max
            )
        } else {
            write!(f, "{} is not a finite number", self.metric.field_name())
        }
    }
}

/// What to do with out-of-range metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log each issue and score anyway
    #[default]
    Warn,
    /// Refuse to score, reporting every issue
    Strict,
}

/// Collect every out-of-range or non-finite metric.
pub fn validate(metrics: &HealthMetrics) -> Vec<RangeIssue> {
    FORM_RANGES
        .iter()
        .filter_map(|range| {
            let value = range.metric.value_of(metrics);
            (!range.contains(value)).then(|| RangeIssue::new(range.metric, value))
        })
        .collect()
}

pub fn enforce(metrics: &HealthMetrics, policy: ValidationPolicy) -> Result<()> {
    let issues = validate(metrics);
    if issues.is_empty() {
        return Ok(());
    }

    match policy {
        ValidationPolicy::Warn => {
            for issue in &issues {
                log::warn!("Metric outside the usual range, scoring anyway: {}", issue);
            }
            Ok(())
        }
        ValidationPolicy::Strict => Err(VitalRiskError::Validation(issues)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_are_in_range() {
        assert!(validate(&HealthMetrics::default()).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let metrics = HealthMetrics {
            age: 18.0,
            daily_steps: 30_000.0,
            stress_level: 10.0,
            ..HealthMetrics::default()
        };
        assert!(validate(&metrics).is_empty());
    }

    #[test]
    fn reports_all_issues_in_field_order() {
        let metrics = HealthMetrics {
            age: -1.0,
            cholesterol: 500.0,
            stress_level: f64::NAN,
            ..HealthMetrics::default()
        };
        let issues = validate(&metrics);
        let fields: Vec<&str> = issues.iter().map(|i| i.metric.field_name()).collect();
        assert_eq!(fields, vec!["age", "cholesterol", "stressLevel"]);
        assert_eq!(issues[2].to_string(), "stressLevel is not a finite number");
    }

    #[test]
    fn warn_policy_accepts_out_of_range_input() {
        let metrics = HealthMetrics {
            bmi: 80.0,
            ..HealthMetrics::default()
        };
        assert!(enforce(&metrics, ValidationPolicy::Warn).is_ok());
    }

    #[test]
    fn strict_policy_rejects_out_of_range_input() {
        let metrics = HealthMetrics {
            bmi: 80.0,
            ..HealthMetrics::default()
        };
        match enforce(&metrics, ValidationPolicy::Strict) {
            Err(VitalRiskError::Validation(issues)) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].to_string(), "bmi=80 (expected 10-60)");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
