//! Core data types shared by the scorer, the input loaders and the writers.
//!
//! Field names serialize in camelCase so that records exchanged with the
//! assessment form (`bloodPressure`, `sleepHours`, ...) round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One set of health metrics, as collected by the assessment form.
///
/// The scorer performs no validation on these values. Range checks live in
/// [`crate::input::validation`] and are applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HealthMetrics {
    /// Age in years
    pub age: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Systolic blood pressure (mmHg)
    pub blood_pressure: f64,
    /// Glycated hemoglobin (%)
    pub hba1c: f64,
    /// Total cholesterol (mg/dL)
    pub cholesterol: f64,
    /// Average sleep per night (hours)
    pub sleep_hours: f64,
    /// Average steps per day
    pub daily_steps: f64,
    /// Self-reported stress on a 1-10 scale
    pub stress_level: f64,
    /// Family history of chronic disease
    pub family_history: bool,
}

impl Default for HealthMetrics {
    /// Starting values of the assessment form.
    fn default() -> Self {
        Self {
            age: 35.0,
            bmi: 24.0,
            blood_pressure: 120.0,
            hba1c: 5.5,
            cholesterol: 180.0,
            sleep_hours: 7.0,
            daily_steps: 6000.0,
            stress_level: 5.0,
            family_history: false,
        }
    }
}

/// The metrics that contribute a sub-score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Age,
    Bmi,
    BloodPressure,
    Hba1c,
    Cholesterol,
    SleepHours,
    DailySteps,
    StressLevel,
    FamilyHistory,
}

impl MetricKind {
    pub const ALL: [MetricKind; 9] = [
        MetricKind::Age,
        MetricKind::Bmi,
        MetricKind::BloodPressure,
        MetricKind::Hba1c,
        MetricKind::Cholesterol,
        MetricKind::SleepHours,
        MetricKind::DailySteps,
        MetricKind::StressLevel,
        MetricKind::FamilyHistory,
    ];

    /// Wire name of the field, as used in input files.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Bmi => "bmi",
            Self::BloodPressure => "bloodPressure",
            Self::Hba1c => "hba1c",
            Self::Cholesterol => "cholesterol",
            Self::SleepHours => "sleepHours",
            Self::DailySteps => "dailySteps",
            Self::StressLevel => "stressLevel",
            Self::FamilyHistory => "familyHistory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Bmi => "BMI",
            Self::BloodPressure => "Blood pressure",
            Self::Hba1c => "HbA1c",
            Self::Cholesterol => "Cholesterol",
            Self::SleepHours => "Sleep",
            Self::DailySteps => "Daily steps",
            Self::StressLevel => "Stress",
            Self::FamilyHistory => "Family history",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Age => "years",
            Self::Bmi => "kg/m²",
            Self::BloodPressure => "mmHg",
            Self::Hba1c => "%",
            Self::Cholesterol => "mg/dL",
            Self::SleepHours => "h/night",
            Self::DailySteps => "steps/day",
            Self::StressLevel => "/10",
            Self::FamilyHistory => "",
        }
    }

    /// Numeric value of this metric; family history maps to 1.0 / 0.0.
    pub fn value_of(&self, metrics: &HealthMetrics) -> f64 {
        match self {
            Self::Age => metrics.age,
            Self::Bmi => metrics.bmi,
            Self::BloodPressure => metrics.blood_pressure,
            Self::Hba1c => metrics.hba1c,
            Self::Cholesterol => metrics.cholesterol,
            Self::SleepHours => metrics.sleep_hours,
            Self::DailySteps => metrics.daily_steps,
            Self::StressLevel => metrics.stress_level,
            Self::FamilyHistory => {
                if metrics.family_history {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse three-tier bucketing of the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,    // score < 30
    Medium, // 30 <= score < 60
    High,   // score >= 60
}

impl RiskCategory {
    pub const MEDIUM_THRESHOLD: u32 = 30;
    pub const HIGH_THRESHOLD: u32 = 60;

    pub fn from_score(score: u32) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            Self::Low
        } else if score < Self::HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Your health indicators are within normal ranges.",
            Self::Medium => "Some health indicators require attention.",
            Self::High => "Several health indicators need immediate attention.",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thematic decomposition of the risk, in whole percentages.
///
/// Each value is rounded independently and is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub metabolic: u32,
    pub cardiovascular: u32,
    pub lifestyle: u32,
    pub genetic: u32,
}

impl RiskBreakdown {
    /// Labelled entries in display order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("Metabolic", self.metabolic),
            ("Cardiovascular", self.cardiovascular),
            ("Lifestyle", self.lifestyle),
            ("Genetic", self.genetic),
        ]
    }
}

/// Outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Normalized score, 0-100 inclusive
    pub score: u32,
    pub category: RiskCategory,
    /// Ordered; the first entry is the urgent consult for high risk
    pub recommendations: Vec<String>,
    pub breakdown: RiskBreakdown,
}

/// The nine raw sub-scores, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactorScores {
    pub age: u32,
    pub bmi: u32,
    pub blood_pressure: u32,
    pub hba1c: u32,
    pub cholesterol: u32,
    pub sleep: u32,
    pub steps: u32,
    pub stress: u32,
    pub family_history: u32,
}

impl FactorScores {
    /// Sum of all sub-scores, 0-110.
    pub fn total(&self) -> u32 {
        self.age
            + self.bmi
            + self.blood_pressure
            + self.hba1c
            + self.cholesterol
            + self.sleep
            + self.steps
            + self.stress
            + self.family_history
    }

    pub fn get(&self, kind: MetricKind) -> u32 {
        match kind {
            MetricKind::Age => self.age,
            MetricKind::Bmi => self.bmi,
            MetricKind::BloodPressure => self.blood_pressure,
            MetricKind::Hba1c => self.hba1c,
            MetricKind::Cholesterol => self.cholesterol,
            MetricKind::SleepHours => self.sleep,
            MetricKind::DailySteps => self.steps,
            MetricKind::StressLevel => self.stress,
            MetricKind::FamilyHistory => self.family_history,
        }
    }

    pub(crate) fn set(&mut self, kind: MetricKind, score: u32) {
        let slot = match kind {
            MetricKind::Age => &mut self.age,
            MetricKind::Bmi => &mut self.bmi,
            MetricKind::BloodPressure => &mut self.blood_pressure,
            MetricKind::Hba1c => &mut self.hba1c,
            MetricKind::Cholesterol => &mut self.cholesterol,
            MetricKind::SleepHours => &mut self.sleep,
            MetricKind::DailySteps => &mut self.steps,
            MetricKind::StressLevel => &mut self.stress,
            MetricKind::FamilyHistory => &mut self.family_history,
        };
        *slot = score;
    }
}
