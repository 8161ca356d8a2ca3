//! WHO 10-year CVD risk (fatal and non-fatal CHD plus stroke).
//!
//! Applies to ages 40-80. The laboratory model is used when lab results
//! carry a total cholesterol inside the chart range (2.6-10.3 mmol/L);
//! otherwise the non-laboratory model runs on BMI, assuming 25 when unknown.
//! CHD and stroke risks are combined as independent events, then scaled by
//! the region's calibration factor.

pub mod coefficients;
pub mod region;

pub use region::WhoRegion;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::coefficients::{
    LabHazardRatios, NonLabHazardRatios, AGE_CENTER, AGE_SCALE, BMI_CENTER, SBP_CENTER, SBP_SCALE,
    TOTAL_CHOLESTEROL_CENTER,
};
use super::{clamp_percent, ten_year_score, PercentThresholds};
use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use crate::units::{mgdl_to_mmoll, round_to};

pub const MIN_AGE: i32 = 40;
pub const MAX_AGE: i32 = 80;

/// Chart range for total cholesterol, mmol/L.
const LAB_TC_RANGE: std::ops::RangeInclusive<f64> = 2.6..=10.3;
const ELEVATED_TC_MMOL: f64 = 5.0;

const THRESHOLDS: PercentThresholds = PercentThresholds {
    high: 20.0,
    intermediate: 10.0,
    borderline: 5.0,
};

/// Which chart produced the estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WhoModel {
    Lab,
    NonLab,
}

impl WhoModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhoModel::Lab => "lab",
            WhoModel::NonLab => "non_lab",
        }
    }
}

/// Centered predictors shared by both charts.
struct Centered {
    age: f64,
    sbp: f64,
    smoker: f64,
}

impl LabHazardRatios {
    fn linear_predictor(&self, x: &Centered, diabetes: bool, tc_mmol: f64) -> f64 {
        self.age.ln() * x.age
            + self.smoker.ln() * x.smoker
            + self.sbp.ln() * x.sbp
            + self.diabetes.ln() * if diabetes { 1.0 } else { 0.0 }
            + self.total_cholesterol.ln() * (tc_mmol - TOTAL_CHOLESTEROL_CENTER)
    }
}

impl NonLabHazardRatios {
    fn linear_predictor(&self, x: &Centered, bmi: f64) -> f64 {
        self.age.ln() * x.age
            + self.smoker.ln() * x.smoker
            + self.sbp.ln() * x.sbp
            + self.bmi.ln() * (bmi - BMI_CENTER)
    }
}

fn outcome_risk(baseline_survival: f64, linear_predictor: f64) -> f64 {
    1.0 - baseline_survival.powf(linear_predictor.exp())
}

/// WHO candidate for the given region, or `None` outside ages 40-80.
pub fn calculate_who_cvd_risk(patient: &NormalizedPatient, region: WhoRegion) -> Option<RiskCandidate> {
    if !(MIN_AGE..=MAX_AGE).contains(&patient.age) {
        debug!(model = "who_cvd_10yr", age = patient.age, "age outside validated range");
        return None;
    }

    let sex = patient.sex_at_birth;
    let sbp = patient.systolic_bp.max(90);
    let smoker = patient.is_current_smoker();
    let diabetes = patient.has_diabetes();
    let lab_tc = patient
        .total_cholesterol
        .filter(|_| patient.has_lab_results)
        .map(mgdl_to_mmoll)
        .filter(|tc| LAB_TC_RANGE.contains(tc));

    let x = Centered {
        age: (f64::from(patient.age) - AGE_CENTER) / AGE_SCALE,
        sbp: (f64::from(sbp) - SBP_CENTER) / SBP_SCALE,
        smoker: if smoker { 1.0 } else { 0.0 },
    };
    let s0 = coefficients::baseline(sex);

    let (model, lp_chd, lp_stroke) = match lab_tc {
        Some(tc) => {
            let hr = coefficients::lab(sex);
            (
                WhoModel::Lab,
                hr.chd.linear_predictor(&x, diabetes, tc),
                hr.stroke.linear_predictor(&x, diabetes, tc),
            )
        }
        None => {
            let hr = coefficients::non_lab(sex);
            let bmi = patient.bmi.unwrap_or(BMI_CENTER);
            (
                WhoModel::NonLab,
                hr.chd.linear_predictor(&x, bmi),
                hr.stroke.linear_predictor(&x, bmi),
            )
        }
    };

    let risk_chd = outcome_risk(s0.chd, lp_chd);
    let risk_stroke = outcome_risk(s0.stroke, lp_stroke);
    let combined = 1.0 - (1.0 - risk_chd) * (1.0 - risk_stroke);
    let risk_percent = clamp_percent(combined * region.calibration());
    let level = THRESHOLDS.level(risk_percent);

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
    if lab_tc.is_some_and(|tc| tc > ELEVATED_TC_MMOL) {
        why.push("Elevated total cholesterol".to_string());
    }
    if patient.age >= 60 {
        why.push("Age ≥60".to_string());
    }

    let actions: Vec<&str> = match level {
        RiskLevel::High => vec![
            "Lifestyle and pharmacological intervention per WHO guidance",
            "BP and lipid management",
            "Regular monitoring",
        ],
        RiskLevel::Intermediate => vec![
            "Lifestyle modifications",
            "Consider BP/lipid targets",
            "Reassess in 5-10 years",
        ],
        _ => Vec::new(),
    };

    debug!(model = "who_cvd_10yr", chart = model.as_str(), %region, risk_percent, %level, "calculated");

    Some(
        RiskCandidate::new("who_cvd_10yr", "10-Year WHO CVD Risk", level, ten_year_score(risk_percent))
            .with_value("riskPercent", round_to(risk_percent, 1))
            .with_value("age", patient.age)
            .with_value("sex", sex.as_str())
            .with_value("model", model.as_str())
            .with_value("region", region.as_str())
            .with_value("note", "WHO CVD risk charts (21 regions), lab and non-lab models")
            .with_why(why)
            .with_actions(actions),
    )
}
