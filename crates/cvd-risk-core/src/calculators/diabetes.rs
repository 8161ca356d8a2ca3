//! Diabetes as a cardiovascular risk factor, or the risk of developing
//! type 2 diabetes when the patient does not have it.

use crate::models::{ActivityLevel, NormalizedPatient, RiskCandidate, RiskLevel};
use tracing::debug;

const BASE_SCORE: f64 = 0.2;
const MAX_SCORE: f64 = 0.7;

/// Diabetes candidate. Always applies.
pub fn calculate_diabetes_risk(patient: &NormalizedPatient) -> RiskCandidate {
    if patient.has_diabetes() {
        debug!(model = "diabetes", "diabetes present");
        return RiskCandidate::new(
            "diabetes",
            "Diabetes as Cardiovascular Risk Factor",
            RiskLevel::High,
            0.8,
        )
        .with_why(vec!["Diabetes = Yes".to_string()])
        .with_actions([
            "Diabetes is a major CV risk factor",
            "A1c monitoring and glycemic control",
            "Regular cardiovascular screening",
            "Lifestyle + medication adherence",
            "Annual lipid panel and kidney function tests",
        ]);
    }

    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    match patient.bmi {
        Some(bmi) if bmi >= 30.0 => {
            score += 0.2;
            factors.push(format!("BMI {} (obese)", bmi));
        }
        Some(bmi) if bmi >= 25.0 => {
            score += 0.1;
            factors.push(format!("BMI {} (overweight)", bmi));
        }
        _ => {}
    }
    if patient.age >= 45 {
        score += 0.15;
        factors.push("Age ≥45".to_string());
    }
    if patient.has_family_history() {
        score += 0.1;
        factors.push("Family history of CVD".to_string());
    }
    if patient.physical_activity == Some(ActivityLevel::LessThanOnce) {
        score += 0.1;
        factors.push("Low physical activity".to_string());
    }

    // Level uses the uncapped score
    let level = if score >= 0.5 {
        RiskLevel::Intermediate
    } else if score >= 0.3 {
        RiskLevel::Borderline
    } else {
        RiskLevel::Low
    };

    debug!(model = "diabetes_risk", score, %level, "calculated");

    if factors.is_empty() {
        factors.push("No major risk factors identified".to_string());
    }

    let actions: Vec<&str> = if level != RiskLevel::Low {
        vec![
            "Regular glucose screening",
            "Weight management if overweight",
            "Increase physical activity",
            "Healthy diet (Mediterranean or DASH)",
        ]
    } else {
        Vec::new()
    };

    RiskCandidate::new("diabetes_risk", "Type 2 Diabetes Risk", level, score.min(MAX_SCORE))
        .with_why(factors)
        .with_actions(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FamilyHistory, Sex, YesNo};

    #[test]
    fn test_existing_diabetes() {
        let mut p = NormalizedPatient::new(35, Sex::Female, 118);
        p.has_diabetes = YesNo::Yes;

        let candidate = calculate_diabetes_risk(&p);
        assert_eq!(candidate.id, "diabetes");
        assert_eq!(candidate.level, RiskLevel::High);
        assert_eq!(candidate.score, 0.8);
        assert_eq!(candidate.actions.unwrap().len(), 5);
    }

    #[test]
    fn test_no_risk_factors() {
        let p = NormalizedPatient::new(30, Sex::Male, 118);
        let candidate = calculate_diabetes_risk(&p);
        assert_eq!(candidate.id, "diabetes_risk");
        assert_eq!(candidate.level, RiskLevel::Low);
        assert_eq!(candidate.score, 0.2);
        assert_eq!(candidate.why, vec!["No major risk factors identified"]);
        assert!(candidate.actions.is_none());
    }

    #[test]
    fn test_overweight_is_borderline() {
        let mut p = NormalizedPatient::new(30, Sex::Male, 118);
        p.bmi = Some(27.5);
        let candidate = calculate_diabetes_risk(&p);
        assert_eq!(candidate.level, RiskLevel::Borderline);
        assert_eq!(candidate.why, vec!["BMI 27.5 (overweight)"]);
        assert!(candidate.actions.is_some());
    }

    #[test]
    fn test_all_factors_capped() {
        let mut p = NormalizedPatient::new(50, Sex::Male, 118);
        p.bmi = Some(32.0);
        p.family_history_premature_cvd = Some(FamilyHistory::Yes);
        p.physical_activity = Some(ActivityLevel::LessThanOnce);

        let candidate = calculate_diabetes_risk(&p);
        assert_eq!(candidate.level, RiskLevel::Intermediate);
        assert_eq!(candidate.score, MAX_SCORE);
        assert_eq!(
            candidate.why,
            vec![
                "BMI 32 (obese)",
                "Age ≥45",
                "Family history of CVD",
                "Low physical activity",
            ]
        );
    }
}
