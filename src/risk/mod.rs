pub mod ladder;
pub mod recommendations;

use crate::core::{FactorScores, HealthMetrics, MetricKind, RiskBreakdown, RiskCategory, RiskResult};
use ladder::{Condition, Outcome, Rung, ThresholdLadder};
use recommendations as rec;
use serde::Serialize;

/// Raw totals are normalized against this nominal maximum.
pub const NORMALIZATION_TOTAL: f64 = 110.0;
pub const MAX_SCORE: u32 = 100;

const METABOLIC_MAX: f64 = 30.0; // bmi + hba1c
const CARDIOVASCULAR_MAX: f64 = 25.0; // blood pressure + cholesterol
const LIFESTYLE_MAX: f64 = 30.0; // sleep + steps + stress

pub const AGE_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::Age,
    rungs: &[
        Rung::new(Condition::Below(30.0), Outcome::silent(0)),
        Rung::new(Condition::Below(40.0), Outcome::silent(5)),
        Rung::new(Condition::Below(50.0), Outcome::silent(8)),
        Rung::new(Condition::Below(60.0), Outcome::silent(12)),
    ],
    otherwise: Outcome::silent(15),
};

pub const BMI_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::Bmi,
    rungs: &[
        Rung::new(Condition::Below(18.5), Outcome::advising(5, rec::UNDERWEIGHT)),
        Rung::new(Condition::Below(25.0), Outcome::silent(0)),
        Rung::new(Condition::Below(30.0), Outcome::advising(8, rec::REDUCE_BMI)),
    ],
    otherwise: Outcome::advising(15, rec::WEIGHT_MANAGEMENT),
};

pub const BLOOD_PRESSURE_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::BloodPressure,
    rungs: &[
        Rung::new(Condition::Below(120.0), Outcome::silent(0)),
        Rung::new(
            Condition::Below(130.0),
            Outcome::advising(5, rec::MONITOR_BLOOD_PRESSURE),
        ),
        Rung::new(
            Condition::Below(140.0),
            Outcome::advising(10, rec::CONSULT_BLOOD_PRESSURE),
        ),
    ],
    otherwise: Outcome::advising(15, rec::HYPERTENSION_CONSULT),
};

pub const HBA1C_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::Hba1c,
    rungs: &[
        Rung::new(Condition::Below(5.7), Outcome::silent(0)),
        Rung::new(Condition::Below(6.4), Outcome::advising(8, rec::PRE_DIABETIC)),
    ],
    otherwise: Outcome::advising(15, rec::DIABETES_RISK),
};

pub const CHOLESTEROL_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::Cholesterol,
    rungs: &[
        Rung::new(Condition::Below(200.0), Outcome::silent(0)),
        Rung::new(Condition::Below(240.0), Outcome::advising(5, rec::CHOLESTEROL_DIET)),
    ],
    otherwise: Outcome::advising(10, rec::LIPID_MANAGEMENT),
};

// [6, 10] contains [7, 9]; rung order decides which one applies.
pub const SLEEP_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::SleepHours,
    rungs: &[
        Rung::new(Condition::Within(7.0, 9.0), Outcome::silent(0)),
        Rung::new(Condition::Within(6.0, 10.0), Outcome::advising(5, rec::SLEEP_TARGET)),
    ],
    otherwise: Outcome::advising(10, rec::IRREGULAR_SLEEP),
};

pub const STEPS_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::DailySteps,
    rungs: &[
        Rung::new(Condition::AtLeast(10_000.0), Outcome::silent(0)),
        Rung::new(Condition::AtLeast(7_000.0), Outcome::advising(3, rec::GOOD_ACTIVITY)),
        Rung::new(
            Condition::AtLeast(5_000.0),
            Outcome::advising(6, rec::INCREASE_ACTIVITY),
        ),
    ],
    otherwise: Outcome::advising(10, rec::SEDENTARY),
};

pub const STRESS_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::StressLevel,
    rungs: &[
        Rung::new(Condition::AtMost(3.0), Outcome::silent(0)),
        Rung::new(Condition::AtMost(5.0), Outcome::silent(3)),
        Rung::new(Condition::AtMost(7.0), Outcome::advising(6, rec::STRESS_MANAGEMENT)),
    ],
    otherwise: Outcome::advising(10, rec::HIGH_STRESS),
};

pub const FAMILY_HISTORY_LADDER: ThresholdLadder = ThresholdLadder {
    metric: MetricKind::FamilyHistory,
    rungs: &[Rung::new(Condition::Set, Outcome::advising(10, rec::FAMILY_HISTORY))],
    otherwise: Outcome::silent(0),
};

/// Ladders in evaluation order. Recommendation order follows this order.
pub const STANDARD_LADDERS: [ThresholdLadder; 9] = [
    AGE_LADDER,
    BMI_LADDER,
    BLOOD_PRESSURE_LADDER,
    HBA1C_LADDER,
    CHOLESTEROL_LADDER,
    SLEEP_LADDER,
    STEPS_LADDER,
    STRESS_LADDER,
    FAMILY_HISTORY_LADDER,
];

/// One factor's share of an assessment, for explanations.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub metric: MetricKind,
    pub value: f64,
    pub score: u32,
    pub max_score: u32,
    pub recommendation: Option<String>,
}

/// Pure, deterministic health risk scorer.
///
/// Every input, including negative or non-finite numbers, produces a fully
/// populated [`RiskResult`]; out-of-domain values land in whichever rung of
/// each ladder they satisfy, or its fallback.
#[derive(Clone, Debug)]
pub struct RiskScorer {
    ladders: &'static [ThresholdLadder],
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self {
            ladders: &STANDARD_LADDERS,
        }
    }
}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute_risk(&self, metrics: &HealthMetrics) -> RiskResult {
        let (factors, mut recommendations) = self.score_factors(metrics);

        let score = normalize_total(factors.total());
        let category = RiskCategory::from_score(score);
        apply_category_recommendations(category, &mut recommendations);

        RiskResult {
            score,
            category,
            recommendations,
            breakdown: calculate_breakdown(&factors),
        }
    }

    /// Evaluate every ladder, collecting sub-scores and the recommendations
    /// they emit in evaluation order.
    pub fn score_factors(&self, metrics: &HealthMetrics) -> (FactorScores, Vec<String>) {
        self.ladders.iter().fold(
            (FactorScores::default(), Vec::new()),
            |(mut factors, mut recommendations), ladder| {
                let outcome = ladder.evaluate(ladder.metric.value_of(metrics));
                factors.set(ladder.metric, outcome.score);
                if let Some(text) = outcome.recommendation {
                    recommendations.push(text.to_string());
                }
                (factors, recommendations)
            },
        )
    }

    pub fn explain(&self, metrics: &HealthMetrics) -> Vec<FactorContribution> {
        self.ladders
            .iter()
            .map(|ladder| {
                let value = ladder.metric.value_of(metrics);
                let outcome = ladder.evaluate(value);
                FactorContribution {
                    metric: ladder.metric,
                    value,
                    score: outcome.score,
                    max_score: ladder.max_score(),
                    recommendation: outcome.recommendation.map(str::to_string),
                }
            })
            .collect()
    }
}

/// Score one record with the standard ladders.
pub fn compute_risk(metrics: &HealthMetrics) -> RiskResult {
    RiskScorer::default().compute_risk(metrics)
}

/// Round half up. Only ever applied to non-negative quotients.
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

pub fn normalize_total(total: u32) -> u32 {
    round_half_up(total as f64 / NORMALIZATION_TOTAL * 100.0).min(MAX_SCORE)
}

pub fn calculate_breakdown(factors: &FactorScores) -> RiskBreakdown {
    let percent = |points: u32, max: f64| round_half_up(points as f64 / max * 100.0);

    RiskBreakdown {
        metabolic: percent(factors.bmi + factors.hba1c, METABOLIC_MAX),
        cardiovascular: percent(factors.blood_pressure + factors.cholesterol, CARDIOVASCULAR_MAX),
        lifestyle: percent(factors.sleep + factors.steps + factors.stress, LIFESTYLE_MAX),
        genetic: if factors.family_history > 0 { 100 } else { 0 },
    }
}

/// Category-driven adjustments, applied once the category is known.
fn apply_category_recommendations(category: RiskCategory, recommendations: &mut Vec<String>) {
    match category {
        RiskCategory::Low => {
            if recommendations.is_empty() {
                recommendations.push(rec::MAINTAIN_LIFESTYLE.to_string());
            }
        }
        RiskCategory::Medium => recommendations.push(rec::PREVENTIVE_CHECKUP.to_string()),
        RiskCategory::High => recommendations.insert(0, rec::URGENT_CONSULT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> HealthMetrics {
        HealthMetrics {
            age: 25.0,
            bmi: 22.0,
            blood_pressure: 115.0,
            hba1c: 5.0,
            cholesterol: 180.0,
            sleep_hours: 8.0,
            daily_steps: 10_000.0,
            stress_level: 2.0,
            family_history: false,
        }
    }

    #[test]
    fn age_ladder_steps() {
        let cases = [(29.9, 0), (30.0, 5), (39.0, 5), (40.0, 8), (50.0, 12), (59.9, 12), (60.0, 15)];
        for (age, expected) in cases {
            assert_eq!(AGE_LADDER.evaluate(age).score, expected, "age {age}");
            assert_eq!(AGE_LADDER.evaluate(age).recommendation, None);
        }
    }

    #[test]
    fn bmi_underweight_scores_and_advises() {
        let outcome = BMI_LADDER.evaluate(17.0);
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.recommendation, Some(rec::UNDERWEIGHT));
    }

    #[test]
    fn stress_mid_band_is_silent() {
        assert_eq!(STRESS_LADDER.evaluate(4.0), Outcome::silent(3));
        assert_eq!(STRESS_LADDER.evaluate(5.0), Outcome::silent(3));
        assert_eq!(STRESS_LADDER.evaluate(5.5).score, 6);
    }

    #[test]
    fn steps_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(STEPS_LADDER.evaluate(7_000.0).score, 3);
        assert_eq!(STEPS_LADDER.evaluate(6_999.0).score, 6);
        assert_eq!(STEPS_LADDER.evaluate(4_999.0).score, 10);
    }

    #[test]
    fn ladder_maxima_match_documented_ranges() {
        let maxima: Vec<u32> = STANDARD_LADDERS.iter().map(|l| l.max_score()).collect();
        assert_eq!(maxima, vec![15, 15, 15, 15, 10, 10, 10, 10, 10]);
    }

    #[test]
    fn normalization_caps_at_one_hundred() {
        assert_eq!(normalize_total(0), 0);
        assert_eq!(normalize_total(33), 30);
        assert_eq!(normalize_total(66), 60);
        assert_eq!(normalize_total(110), 100);
        assert_eq!(normalize_total(117), 100);
    }

    #[test]
    fn round_half_up_rounds_ties_upward() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn breakdown_rounds_each_component() {
        let factors = FactorScores {
            bmi: 8,
            hba1c: 0,
            blood_pressure: 5,
            cholesterol: 0,
            sleep: 5,
            steps: 3,
            stress: 3,
            family_history: 10,
            ..FactorScores::default()
        };
        let breakdown = calculate_breakdown(&factors);
        assert_eq!(breakdown.metabolic, 27); // 26.67
        assert_eq!(breakdown.cardiovascular, 20);
        assert_eq!(breakdown.lifestyle, 37); // 36.67
        assert_eq!(breakdown.genetic, 100);
    }

    #[test]
    fn healthy_profile_gets_single_maintenance_recommendation() {
        let result = compute_risk(&healthy());
        assert_eq!(result.score, 0);
        assert_eq!(result.recommendations, vec![rec::MAINTAIN_LIFESTYLE.to_string()]);
    }

    #[test]
    fn low_profile_with_advice_skips_maintenance_text() {
        let metrics = HealthMetrics {
            sleep_hours: 6.0,
            ..healthy()
        };
        let result = compute_risk(&metrics);
        assert_eq!(result.category, RiskCategory::Low);
        assert_eq!(result.recommendations, vec![rec::SLEEP_TARGET.to_string()]);
    }

    #[test]
    fn high_risk_prepends_urgent_consult() {
        let metrics = HealthMetrics {
            age: 65.0,
            bmi: 35.0,
            blood_pressure: 150.0,
            hba1c: 7.0,
            cholesterol: 250.0,
            ..healthy()
        };
        let result = compute_risk(&metrics);
        assert_eq!(result.score, 64);
        assert_eq!(result.category, RiskCategory::High);
        assert_eq!(result.recommendations[0], rec::URGENT_CONSULT);
        assert_eq!(result.recommendations[1], rec::WEIGHT_MANAGEMENT);
        assert_eq!(result.recommendations.len(), 5);
    }

    #[test]
    fn explain_reports_every_factor_in_order() {
        let contributions = RiskScorer::new().explain(&healthy());
        let metrics: Vec<MetricKind> = contributions.iter().map(|c| c.metric).collect();
        assert_eq!(metrics, MetricKind::ALL.to_vec());
        assert!(contributions.iter().all(|c| c.score == 0));
    }

    #[test]
    fn explain_agrees_with_factor_scores() {
        let metrics = HealthMetrics {
            age: 45.0,
            cholesterol: 220.0,
            family_history: true,
            ..healthy()
        };
        let scorer = RiskScorer::new();
        let (factors, _) = scorer.score_factors(&metrics);
        for contribution in scorer.explain(&metrics) {
            assert_eq!(contribution.score, factors.get(contribution.metric));
        }
    }

    #[test]
    fn negative_and_nan_inputs_still_score() {
        let metrics = HealthMetrics {
            age: -5.0,
            bmi: f64::NAN,
            sleep_hours: f64::NAN,
            daily_steps: -100.0,
            ..healthy()
        };
        let result = compute_risk(&metrics);
        // age < 30 -> 0, bmi NaN -> 15, sleep NaN -> 10, steps negative -> 10
        assert_eq!(result.score, normalize_total(35));
        assert!(result.recommendations.contains(&rec::WEIGHT_MANAGEMENT.to_string()));
    }
}
