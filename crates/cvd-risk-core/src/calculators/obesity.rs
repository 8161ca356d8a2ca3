//! BMI-based cardiometabolic risk.

use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use tracing::debug;

/// Obesity candidate for BMI ≥30; `None` below that or without a BMI.
pub fn calculate_obesity_risk(patient: &NormalizedPatient) -> Option<RiskCandidate> {
    let Some(bmi) = patient.bmi else {
        debug!(model = "obesity", "no BMI");
        return None;
    };

    if bmi >= 35.0 {
        debug!(model = "severe_obesity", bmi, "calculated");
        return Some(
            RiskCandidate::new(
                "severe_obesity",
                "Severe Obesity / Cardiometabolic Risk",
                RiskLevel::High,
                0.75,
            )
            .with_value("bmi", bmi)
            .with_why(vec![format!("BMI {} (≥35 - severe obesity)", bmi)])
            .with_actions([
                "Weight management plan with healthcare provider",
                "Nutrition counseling",
                "Physical activity program",
                "Consider bariatric evaluation if BMI ≥40",
                "Metabolic screening",
            ]),
        );
    }

    if bmi >= 30.0 {
        debug!(model = "obesity", bmi, "calculated");
        return Some(
            RiskCandidate::new("obesity", "Obesity Risk", RiskLevel::Intermediate, 0.5)
                .with_value("bmi", bmi)
                .with_why(vec![format!("BMI {} (obese)", bmi)])
                .with_actions([
                    "Weight management",
                    "Calorie reduction",
                    "Regular physical activity",
                    "Metabolic monitoring",
                ]),
        );
    }

    debug!(model = "obesity", bmi, "below obesity threshold");
    None
}
