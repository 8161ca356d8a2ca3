//! Risk model calculators.
//!
//! Each model is a pure function of the normalized patient returning
//! `Some(candidate)` when it applies and `None` when it does not (age out of
//! the validated range, missing labs, ...). `None` is routine, not an error.
//!
//! Models:
//! - [`bp`]: blood pressure category (always applies)
//! - [`diabetes`]: diabetes present / type 2 diabetes risk (always applies)
//! - [`obesity`]: BMI ≥30
//! - [`relative`]: risk factor summary for under-40s
//! - [`ascvd`]: Pooled Cohort Equations, 10-year ASCVD
//! - [`framingham`]: Framingham 10-year CHD
//! - [`who`]: WHO CVD charts, lab and non-lab, region calibrated

pub mod ascvd;
pub mod bp;
pub mod diabetes;
pub mod framingham;
pub mod obesity;
pub mod relative;
pub mod who;

pub use ascvd::calculate_ascvd_risk;
pub use bp::calculate_bp_risk;
pub use diabetes::calculate_diabetes_risk;
pub use framingham::calculate_framingham_risk;
pub use obesity::calculate_obesity_risk;
pub use relative::calculate_relative_risk;
pub use who::{calculate_who_cvd_risk, WhoRegion};

use crate::models::RiskLevel;

/// A coefficient that depends on whether blood pressure is treated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Treatment {
    pub untreated: f64,
    pub treated: f64,
}

impl Treatment {
    pub const fn new(untreated: f64, treated: f64) -> Self {
        Self { untreated, treated }
    }

    pub fn select(&self, on_bp_meds: bool) -> f64 {
        if on_bp_meds {
            self.treated
        } else {
            self.untreated
        }
    }
}

/// Cox survival form: `1 - S0^exp(lp - mean)`.
pub(crate) fn survival_risk(baseline_survival: f64, linear_predictor: f64, mean_linear_predictor: f64) -> f64 {
    1.0 - baseline_survival.powf((linear_predictor - mean_linear_predictor).exp())
}

/// Fraction → percent, clamped to [0, 99].
pub(crate) fn clamp_percent(risk: f64) -> f64 {
    (risk * 100.0).clamp(0.0, 99.0)
}

/// Ranking score shared by the 10-year models.
pub(crate) fn ten_year_score(risk_percent: f64) -> f64 {
    (risk_percent / 30.0).min(0.9)
}

/// Percent cut points for a 10-year model, checked high to low.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PercentThresholds {
    pub high: f64,
    pub intermediate: f64,
    pub borderline: f64,
}

impl PercentThresholds {
    pub fn level(&self, risk_percent: f64) -> RiskLevel {
        if risk_percent >= self.high {
            RiskLevel::High
        } else if risk_percent >= self.intermediate {
            RiskLevel::Intermediate
        } else if risk_percent >= self.borderline {
            RiskLevel::Borderline
        } else {
            RiskLevel::Low
        }
    }
}

/// Contributing factors shared by the lipid-based 10-year models.
pub(crate) fn lipid_model_factors(
    diabetes: bool,
    smoker: bool,
    sbp: i32,
    cholesterol_ratio: Option<f64>,
) -> Vec<String> {
    let mut why = Vec::new();
    if diabetes {
        why.push("Diabetes present".to_string());
    }
    if smoker {
        why.push("Current smoker".to_string());
    }
    if sbp >= 140 {
        why.push(format!("Elevated BP ({} mmHg)", sbp));
    }
    if let Some(ratio) = cholesterol_ratio.filter(|r| *r > 4.0) {
        why.push(format!("Unfavorable cholesterol ratio ({:.1})", ratio));
    }
    why
}
