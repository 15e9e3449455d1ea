//! Collecting health metrics from the outside world.
//!
//! Records come from files (JSON, TOML, YAML), from stdin, or from the form
//! defaults, with individual fields optionally overridden on the command line.

pub mod loader;
pub mod validation;

pub use loader::{load_metrics, parse_metrics, InputFormat};
pub use validation::{enforce, validate, MetricRange, RangeIssue, ValidationPolicy};

use crate::core::HealthMetrics;
use crate::errors::Result;
use std::path::Path;

/// Per-field replacements supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricOverrides {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub blood_pressure: Option<f64>,
    pub hba1c: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub daily_steps: Option<f64>,
    pub stress_level: Option<f64>,
    pub family_history: Option<bool>,
}

impl MetricOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, base: HealthMetrics) -> HealthMetrics {
        HealthMetrics {
            age: self.age.unwrap_or(base.age),
            bmi: self.bmi.unwrap_or(base.bmi),
            blood_pressure: self.blood_pressure.unwrap_or(base.blood_pressure),
            hba1c: self.hba1c.unwrap_or(base.hba1c),
            cholesterol: self.cholesterol.unwrap_or(base.cholesterol),
            sleep_hours: self.sleep_hours.unwrap_or(base.sleep_hours),
            daily_steps: self.daily_steps.unwrap_or(base.daily_steps),
            stress_level: self.stress_level.unwrap_or(base.stress_level),
            family_history: self.family_history.unwrap_or(base.family_history),
        }
    }
}

/// Gather the records to assess.
///
/// Without an input path a single record is built from the form defaults.
/// Overrides apply to every record.
pub fn collect_metrics(
    input: Option<&Path>,
    overrides: &MetricOverrides,
) -> Result<Vec<HealthMetrics>> {
    let records = match input {
        Some(path) => load_metrics(path)?,
        None => vec![HealthMetrics::default()],
    };

    if !overrides.is_empty() {
        log::debug!("Applying command-line overrides to {} record(s)", records.len());
    }

    Ok(records
        .into_iter()
        .map(|metrics| overrides.apply(metrics))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_leave_record_untouched() {
        let overrides = MetricOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(HealthMetrics::default()), HealthMetrics::default());
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let overrides = MetricOverrides {
            age: Some(62.0),
            family_history: Some(true),
            ..MetricOverrides::default()
        };
        let metrics = overrides.apply(HealthMetrics::default());
        assert_eq!(metrics.age, 62.0);
        assert!(metrics.family_history);
        assert_eq!(metrics.bmi, HealthMetrics::default().bmi);
    }

    #[test]
    fn no_input_yields_form_defaults() {
        let records = collect_metrics(None, &MetricOverrides::default()).unwrap();
        assert_eq!(records, vec![HealthMetrics::default()]);
    }
}
