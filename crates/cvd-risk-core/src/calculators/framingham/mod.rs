//! Framingham 10-year coronary heart disease risk.
//!
//! Applies to ages 30-74 with total and HDL cholesterol.

pub mod coefficients;

use tracing::debug;

use super::{
    clamp_percent, lipid_model_factors, survival_risk, ten_year_score, PercentThresholds,
};
use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use crate::units::round_to;

pub const MIN_AGE: i32 = 30;
pub const MAX_AGE: i32 = 74;

const THRESHOLDS: PercentThresholds = PercentThresholds {
    high: 20.0,
    intermediate: 10.0,
    borderline: 5.0,
};

/// Framingham candidate, or `None` outside 30-74 or without a lipid panel.
pub fn calculate_framingham_risk(patient: &NormalizedPatient) -> Option<RiskCandidate> {
    if !(MIN_AGE..=MAX_AGE).contains(&patient.age) {
        debug!(model = "framingham_10yr_chd", age = patient.age, "age outside validated range");
        return None;
    }
    let Some((tc, hdl)) = patient.lipid_panel() else {
        debug!(model = "framingham_10yr_chd", "no lipid panel");
        return None;
    };

    let c = coefficients::for_sex(patient.sex_at_birth);
    let on_meds = patient.on_bp_meds();
    let smoker = patient.is_current_smoker();
    let diabetes = patient.has_diabetes();

    let mut lp = c.ln_age * f64::from(patient.age).ln()
        + c.ln_tc * tc.max(1.0).ln()
        + c.ln_hdl * hdl.max(1.0).ln()
        + c.ln_sbp.select(on_meds) * f64::from(patient.systolic_bp.max(90)).ln();
    if smoker {
        lp += c.smoker;
    }
    if diabetes {
        lp += c.diabetes;
    }

    let risk_percent = clamp_percent(survival_risk(c.baseline_survival, lp, c.mean_linear_predictor));
    let level = THRESHOLDS.level(risk_percent);

    // Factors describe the recorded values, not the floored ones
    let ratio = (hdl != 0.0).then(|| tc / hdl);
    let mut why = lipid_model_factors(diabetes, smoker, patient.systolic_bp, ratio);
    if patient.age >= 60 {
        why.push("Age ≥60".to_string());
    }

    let actions: Vec<&str> = match level {
        RiskLevel::High => vec![
            "Statin and BP therapy per guidelines",
            "Lifestyle modifications",
            "Regular monitoring",
        ],
        RiskLevel::Intermediate => vec![
            "Moderate-intensity statin consideration",
            "BP control",
            "Reassess in 5-10 years",
        ],
        _ => Vec::new(),
    };

    debug!(model = "framingham_10yr_chd", risk_percent, %level, "calculated");

    Some(
        RiskCandidate::new(
            "framingham_10yr_chd",
            "10-Year Framingham CHD Risk",
            level,
            ten_year_score(risk_percent),
        )
        .with_value("riskPercent", round_to(risk_percent, 1))
        .with_value("age", patient.age)
        .with_value("sex", patient.sex_at_birth.as_str())
        .with_value(
            "note",
            "Framingham Heart Study 10-year CHD (D'Agostino 2008), 1 - S₀^exp(ΣβX - B̄)",
        )
        .with_why(why)
        .with_actions(actions),
    )
}
