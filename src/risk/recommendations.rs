//! Recommendation texts emitted by the scorer.
//!
//! These strings are part of the output contract: renderers display them
//! verbatim and tests compare against them.

pub const UNDERWEIGHT: &str = "Consider consulting a nutritionist to achieve a healthy weight.";
pub const REDUCE_BMI: &str = "Aim to reduce BMI through balanced diet and regular exercise.";
pub const WEIGHT_MANAGEMENT: &str = "A weight management program is strongly recommended.";

pub const MONITOR_BLOOD_PRESSURE: &str =
    "Monitor blood pressure regularly and reduce sodium intake.";
pub const CONSULT_BLOOD_PRESSURE: &str =
    "Consult a healthcare provider about blood pressure management.";
pub const HYPERTENSION_CONSULT: &str =
    "Immediate medical consultation for hypertension is recommended.";

pub const PRE_DIABETIC: &str = "Pre-diabetic range detected. Focus on reducing sugar intake and increasing physical activity.";
pub const DIABETES_RISK: &str =
    "HbA1c levels indicate diabetes risk. Medical consultation is essential.";

pub const CHOLESTEROL_DIET: &str = "Consider dietary changes to lower cholesterol levels.";
pub const LIPID_MANAGEMENT: &str =
    "High cholesterol detected. Consult a doctor about lipid management.";

pub const SLEEP_TARGET: &str = "Aim for 7-9 hours of quality sleep each night.";
pub const IRREGULAR_SLEEP: &str = "Irregular sleep patterns increase health risks. Establish a consistent sleep schedule.";

pub const GOOD_ACTIVITY: &str = "Good activity level! Try to reach 10,000 steps daily.";
pub const INCREASE_ACTIVITY: &str = "Increase daily physical activity gradually.";
pub const SEDENTARY: &str =
    "Sedentary lifestyle detected. Start with short walks and build up activity.";

pub const STRESS_MANAGEMENT: &str =
    "Consider stress management techniques like meditation or yoga.";
pub const HIGH_STRESS: &str = "High stress levels can impact health. Seek support and practice relaxation techniques.";

pub const FAMILY_HISTORY: &str = "Family history of conditions increases risk. Regular health screenings are important.";

/// Appended for a low-risk profile that triggered nothing else.
pub const MAINTAIN_LIFESTYLE: &str =
    "Maintain your healthy lifestyle with regular exercise and balanced nutrition.";
/// Appended to every medium-risk result.
pub const PREVENTIVE_CHECKUP: &str =
    "Schedule a preventive health check-up with your healthcare provider.";
/// Prepended to every high-risk result.
pub const URGENT_CONSULT: &str =
    "Priority: Consult a healthcare professional as soon as possible.";
