//! WHO CVD chart hazard ratios and baseline survivals.
//!
//! Each term's coefficient is `ln(hazard ratio)` per unit of the centered
//! predictor: age per 5 years from 60, SBP per 20 mmHg from 120, total
//! cholesterol per mmol/L from 6, BMI per kg/m² from 25.

use crate::models::Sex;

pub const AGE_CENTER: f64 = 60.0;
pub const AGE_SCALE: f64 = 5.0;
pub const SBP_CENTER: f64 = 120.0;
pub const SBP_SCALE: f64 = 20.0;
/// mmol/L
pub const TOTAL_CHOLESTEROL_CENTER: f64 = 6.0;
pub const BMI_CENTER: f64 = 25.0;

/// Hazard ratios for the laboratory model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabHazardRatios {
    pub age: f64,
    pub smoker: f64,
    pub sbp: f64,
    pub diabetes: f64,
    pub total_cholesterol: f64,
}

/// Hazard ratios for the non-laboratory model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonLabHazardRatios {
    pub age: f64,
    pub smoker: f64,
    pub sbp: f64,
    pub bmi: f64,
}

/// A pair of per-outcome tables for one sex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcomes<T> {
    pub chd: T,
    pub stroke: T,
}

/// 10-year baseline survival per outcome for one sex.
pub type BaselineSurvival = Outcomes<f64>;

pub const LAB_MEN: Outcomes<LabHazardRatios> = Outcomes {
    chd: LabHazardRatios {
        age: 1.43,
        smoker: 1.76,
        sbp: 1.3,
        diabetes: 1.9,
        total_cholesterol: 1.26,
    },
    stroke: LabHazardRatios {
        age: 1.64,
        smoker: 1.65,
        sbp: 1.56,
        diabetes: 1.87,
        total_cholesterol: 1.03,
    },
};

pub const LAB_WOMEN: Outcomes<LabHazardRatios> = Outcomes {
    chd: LabHazardRatios {
        age: 1.67,
        smoker: 2.87,
        sbp: 1.37,
        diabetes: 2.92,
        total_cholesterol: 1.23,
    },
    stroke: LabHazardRatios {
        age: 1.7,
        smoker: 2.11,
        sbp: 1.51,
        diabetes: 2.36,
        total_cholesterol: 1.03,
    },
};

pub const NON_LAB_MEN: Outcomes<NonLabHazardRatios> = Outcomes {
    chd: NonLabHazardRatios {
        age: 1.44,
        smoker: 1.81,
        sbp: 1.31,
        bmi: 1.18,
    },
    stroke: NonLabHazardRatios {
        age: 1.63,
        smoker: 1.65,
        sbp: 1.58,
        bmi: 1.08,
    },
};

pub const NON_LAB_WOMEN: Outcomes<NonLabHazardRatios> = Outcomes {
    chd: NonLabHazardRatios {
        age: 1.69,
        smoker: 2.98,
        sbp: 1.4,
        bmi: 1.14,
    },
    stroke: NonLabHazardRatios {
        age: 1.69,
        smoker: 2.1,
        sbp: 1.54,
        bmi: 1.02,
    },
};

pub const BASELINE_MEN: BaselineSurvival = Outcomes {
    chd: 0.954,
    stroke: 0.985,
};

pub const BASELINE_WOMEN: BaselineSurvival = Outcomes {
    chd: 0.989,
    stroke: 0.989,
};

pub fn lab(sex: Sex) -> &'static Outcomes<LabHazardRatios> {
    match sex {
        Sex::Male => &LAB_MEN,
        Sex::Female => &LAB_WOMEN,
    }
}

pub fn non_lab(sex: Sex) -> &'static Outcomes<NonLabHazardRatios> {
    match sex {
        Sex::Male => &NON_LAB_MEN,
        Sex::Female => &NON_LAB_WOMEN,
    }
}

pub fn baseline(sex: Sex) -> &'static BaselineSurvival {
    match sex {
        Sex::Male => &BASELINE_MEN,
        Sex::Female => &BASELINE_WOMEN,
    }
}
