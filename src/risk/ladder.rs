//! Ordered threshold ladders.
//!
//! A ladder is a list of rungs evaluated top to bottom; the first rung whose
//! condition holds decides the sub-score and the optional recommendation.
//! When no rung matches, the ladder's `otherwise` outcome applies, so every
//! ladder is total over `f64` including NaN.

use crate::core::MetricKind;
use serde::Serialize;

/// Predicate over a single metric value.
///
/// All comparisons are false for NaN, which therefore always falls through
/// to the ladder's `otherwise` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Condition {
    /// `value < bound`
    Below(f64),
    /// `value >= bound`
    AtLeast(f64),
    /// `value <= bound`
    AtMost(f64),
    /// `low <= value <= high`
    Within(f64, f64),
    /// Boolean metric is set. Only meaningful for
    /// [`MetricKind::FamilyHistory`], which [`MetricKind::value_of`] encodes
    /// as exactly `1.0` or `0.0`; NaN never matches.
    Set,
}

impl Condition {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Condition::Below(bound) => value < bound,
            Condition::AtLeast(bound) => value >= bound,
            Condition::AtMost(bound) => value <= bound,
            Condition::Within(low, high) => value >= low && value <= high,
            Condition::Set => value == 1.0,
        }
    }
}

/// Sub-score and recommendation produced by a matched rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub score: u32,
    pub recommendation: Option<&'static str>,
}

impl Outcome {
    pub const fn silent(score: u32) -> Self {
        Self {
            score,
            recommendation: None,
        }
    }

    pub const fn advising(score: u32, recommendation: &'static str) -> Self {
        Self {
            score,
            recommendation: Some(recommendation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rung {
    pub condition: Condition,
    pub outcome: Outcome,
}

impl Rung {
    pub const fn new(condition: Condition, outcome: Outcome) -> Self {
        Self { condition, outcome }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdLadder {
    pub metric: MetricKind,
    pub rungs: &'static [Rung],
    pub otherwise: Outcome,
}

impl ThresholdLadder {
    pub fn evaluate(&self, value: f64) -> Outcome {
        self.rungs
            .iter()
            .find(|rung| rung.condition.matches(value))
            .map(|rung| rung.outcome)
            .unwrap_or(self.otherwise)
    }

    /// Largest sub-score any rung can produce.
    pub fn max_score(&self) -> u32 {
        self.rungs
            .iter()
            .map(|rung| rung.outcome.score)
            .fold(self.otherwise.score, u32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAPPING: ThresholdLadder = ThresholdLadder {
        metric: MetricKind::SleepHours,
        rungs: &[
            Rung::new(Condition::Within(7.0, 9.0), Outcome::silent(0)),
            Rung::new(Condition::Within(6.0, 10.0), Outcome::advising(5, "wider")),
        ],
        otherwise: Outcome::advising(10, "outside"),
    };

    #[test]
    fn first_matching_rung_wins() {
        assert_eq!(OVERLAPPING.evaluate(8.0), Outcome::silent(0));
        assert_eq!(OVERLAPPING.evaluate(6.0), Outcome::advising(5, "wider"));
        assert_eq!(OVERLAPPING.evaluate(10.0), Outcome::advising(5, "wider"));
        assert_eq!(OVERLAPPING.evaluate(10.5), Outcome::advising(10, "outside"));
    }

    #[test]
    fn nan_falls_through_to_otherwise() {
        assert_eq!(OVERLAPPING.evaluate(f64::NAN), OVERLAPPING.otherwise);
        assert!(!Condition::Below(1.0).matches(f64::NAN));
        assert!(!Condition::AtLeast(1.0).matches(f64::NAN));
        assert!(!Condition::AtMost(1.0).matches(f64::NAN));
        assert!(!Condition::Set.matches(f64::NAN));
    }

    #[test]
    fn max_score_includes_otherwise() {
        assert_eq!(OVERLAPPING.max_score(), 10);
    }

    #[test]
    fn set_condition_is_reserved_for_family_history() {
        for ladder in crate::risk::STANDARD_LADDERS.iter() {
            let uses_set = ladder
                .rungs
                .iter()
                .any(|rung| rung.condition == Condition::Set);
            assert_eq!(uses_set, ladder.metric == MetricKind::FamilyHistory, "{}", ladder.metric);
        }
        assert!(!Condition::Set.matches(f64::NAN));
    }

    #[test]
    fn set_condition_only_matches_true_flag() {
        assert!(Condition::Set.matches(1.0));
        assert!(!Condition::Set.matches(0.0));
    }
}
