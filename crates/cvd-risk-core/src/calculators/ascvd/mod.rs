//! 10-year ASCVD risk from the Pooled Cohort Equations.
//!
//! Applies to ages 40-79 with total and HDL cholesterol. Risk is
//! `1 - S10^exp(lp - mean)` with group-specific terms from [`coefficients`].

pub mod coefficients;

use tracing::debug;

use self::coefficients::{PceCoefficients, PceGroup};
use super::{
    clamp_percent, lipid_model_factors, survival_risk, ten_year_score, PercentThresholds,
};
use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use crate::units::round_to;

pub const MIN_AGE: i32 = 40;
pub const MAX_AGE: i32 = 79;

const THRESHOLDS: PercentThresholds = PercentThresholds {
    high: 20.0,
    intermediate: 7.5,
    borderline: 5.0,
};

/// Inputs after flooring, as fed to the equations.
struct PceInputs {
    age: f64,
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    systolic_bp: f64,
    on_bp_meds: bool,
    smoker: bool,
    diabetes: bool,
}

fn linear_predictor(c: &PceCoefficients, x: &PceInputs) -> f64 {
    let ln_age = x.age.ln();
    let ln_tc = x.total_cholesterol.ln();
    let ln_hdl = x.hdl_cholesterol.ln();
    let ln_sbp = x.systolic_bp.ln();

    let mut lp = c.ln_age * ln_age
        + c.ln_age_sq * ln_age * ln_age
        + c.ln_tc * ln_tc
        + c.ln_age_ln_tc * ln_age * ln_tc
        + c.ln_hdl * ln_hdl
        + c.ln_age_ln_hdl * ln_age * ln_hdl
        + c.ln_sbp.select(x.on_bp_meds) * ln_sbp;
    if x.smoker {
        lp += c.smoker;
    }
    if x.diabetes {
        lp += c.diabetes;
    }
    if let Some(term) = c.ln_age_ln_sbp {
        lp += term.select(x.on_bp_meds) * ln_age * ln_sbp;
    }
    lp
}

/// ASCVD candidate, or `None` outside 40-79 or without a lipid panel.
pub fn calculate_ascvd_risk(patient: &NormalizedPatient) -> Option<RiskCandidate> {
    if !(MIN_AGE..=MAX_AGE).contains(&patient.age) {
        debug!(model = "ascvd_10yr", age = patient.age, "age outside validated range");
        return None;
    }
    let Some((tc, hdl)) = patient.lipid_panel() else {
        debug!(model = "ascvd_10yr", "no lipid panel");
        return None;
    };

    let sbp = patient.systolic_bp.max(90);
    let inputs = PceInputs {
        age: f64::from(patient.age),
        total_cholesterol: tc.max(1.0),
        hdl_cholesterol: hdl.max(1.0),
        systolic_bp: f64::from(sbp),
        on_bp_meds: patient.on_bp_meds(),
        smoker: patient.is_current_smoker(),
        diabetes: patient.has_diabetes(),
    };

    let group = PceGroup::for_patient(patient.sex_at_birth, patient.is_black());
    let c = group.coefficients();
    let lp = linear_predictor(c, &inputs);
    let risk_percent = clamp_percent(survival_risk(c.baseline_survival, lp, c.mean_linear_predictor));
    let level = THRESHOLDS.level(risk_percent);

    let mut why = lipid_model_factors(
        inputs.diabetes,
        inputs.smoker,
        sbp,
        Some(inputs.total_cholesterol / inputs.hdl_cholesterol),
    );
    if patient.age >= 65 {
        why.push("Age ≥65".to_string());
    }

    let actions: Vec<&str> = match level {
        RiskLevel::High => vec![
            "High-intensity statin therapy (if appropriate)",
            "BP management to <130/80",
            "Lifestyle modifications",
            "Regular monitoring",
        ],
        RiskLevel::Intermediate => vec![
            "Moderate-intensity statin consideration",
            "BP control",
            "Lifestyle modifications",
            "Reassess in 5-10 years",
        ],
        _ => Vec::new(),
    };

    debug!(model = "ascvd_10yr", ?group, risk_percent, %level, "calculated");

    Some(
        RiskCandidate::new("ascvd_10yr", "10-Year ASCVD Risk", level, ten_year_score(risk_percent))
            .with_value("riskPercent", round_to(risk_percent, 1))
            .with_value("age", patient.age)
            .with_value("sex", patient.sex_at_birth.as_str())
            .with_value("raceEthnicity", patient.race_ethnicity.map(|r| r.as_str()))
            .with_value("validated", true)
            .with_value(
                "note",
                "Pooled Cohort Equations (ACC/AHA 2013), formula 1 - S₁₀^exp(ΣβᵢXᵢ - B̄)",
            )
            .with_why(why)
            .with_actions(actions),
    )
}
