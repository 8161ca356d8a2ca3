//! Risk factor summary for patients under 40.
//!
//! Stands in for the 10-year equations, which are not validated at these
//! ages. The score is a relative indicator, not a probability.

use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use tracing::debug;

pub const RELATIVE_RISK_WARNING: &str = "10-year ASCVD risk equations are not validated for ages <40. Showing risk factor summary and lifetime/relative risk indicators instead.";

const BASE_SCORE: f64 = 0.2;
const MAX_SCORE: f64 = 0.8;

/// Relative risk candidate. Applies to any patient; the evaluator only
/// asks for it when ASCVD does not apply and the patient is under 40.
pub fn calculate_relative_risk(patient: &NormalizedPatient) -> RiskCandidate {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    if patient.has_diabetes() {
        factors.push("Diabetes".to_string());
        score += 0.3;
    }
    if patient.is_current_smoker() {
        factors.push("Current smoker".to_string());
        score += 0.25;
    }
    if patient.systolic_bp >= 140 {
        factors.push(format!("Elevated BP ({} mmHg)", patient.systolic_bp));
        score += 0.2;
    }
    if let Some(bmi) = patient.bmi.filter(|b| *b >= 30.0) {
        factors.push(format!("Obesity (BMI {})", bmi));
        score += 0.15;
    }
    if patient.has_family_history() {
        factors.push("Family history of premature CVD".to_string());
        score += 0.1;
    }

    let level = if score >= 0.6 {
        RiskLevel::High
    } else if score >= 0.4 {
        RiskLevel::Intermediate
    } else {
        RiskLevel::Low
    };
    debug!(model = "relative_risk", age = patient.age, score, %level, "calculated");

    if factors.is_empty() {
        factors.push("No major risk factors identified".to_string());
    }

    let actions: Vec<&str> = if level != RiskLevel::Low {
        vec![
            "Focus on modifiable risk factors",
            "Regular health screenings",
            "Lifestyle modifications",
            "Consider 10-year ASCVD risk assessment at age 40+",
        ]
    } else {
        Vec::new()
    };

    RiskCandidate::new(
        "relative_risk",
        "Cardiovascular Risk Factors Summary",
        level,
        score.min(MAX_SCORE),
    )
    .with_value("age", patient.age)
    .with_value("note", "Lifetime/relative risk indicator (proxy)")
    .with_why(factors)
    .with_warnings(vec![RELATIVE_RISK_WARNING.to_string()])
    .with_actions(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FamilyHistory, Sex, SmokingStatus, YesNo};

    #[test]
    fn test_no_factors() {
        let p = NormalizedPatient::new(25, Sex::Female, 115);
        let candidate = calculate_relative_risk(&p);
        assert_eq!(candidate.id, "relative_risk");
        assert_eq!(candidate.level, RiskLevel::Low);
        assert_eq!(candidate.score, 0.2);
        assert_eq!(candidate.warning_messages(), [RELATIVE_RISK_WARNING]);
        assert!(candidate.actions.is_none());
    }

    #[test]
    fn test_smoker_is_intermediate() {
        let mut p = NormalizedPatient::new(32, Sex::Male, 125);
        p.smoking_status = SmokingStatus::Current;
        let candidate = calculate_relative_risk(&p);
        assert_eq!(candidate.level, RiskLevel::Intermediate);
        assert!((candidate.score - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_many_factors_high_and_capped() {
        let mut p = NormalizedPatient::new(38, Sex::Male, 150);
        p.has_diabetes = YesNo::Yes;
        p.smoking_status = SmokingStatus::Current;
        p.bmi = Some(33.0);
        p.family_history_premature_cvd = Some(FamilyHistory::Yes);

        let candidate = calculate_relative_risk(&p);
        assert_eq!(candidate.level, RiskLevel::High);
        assert_eq!(candidate.score, MAX_SCORE);
        assert_eq!(candidate.why.len(), 5);
        assert_eq!(candidate.why[2], "Elevated BP (150 mmHg)");
        assert_eq!(candidate.value["age"], 38);
    }
}
