//! Pooled Cohort Equations coefficients (ACC/AHA 2013), by sex and race.

use crate::calculators::Treatment;
use crate::models::Sex;

/// Demographic group the equations are fitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PceGroup {
    WhiteMale,
    WhiteFemale,
    BlackMale,
    BlackFemale,
}

impl PceGroup {
    /// Everyone not recorded as black uses the white equations.
    pub fn for_patient(sex: Sex, is_black: bool) -> Self {
        match (sex, is_black) {
            (Sex::Male, false) => PceGroup::WhiteMale,
            (Sex::Male, true) => PceGroup::BlackMale,
            (Sex::Female, false) => PceGroup::WhiteFemale,
            (Sex::Female, true) => PceGroup::BlackFemale,
        }
    }

    pub fn coefficients(&self) -> &'static PceCoefficients {
        match self {
            PceGroup::WhiteMale => &WHITE_MALE,
            PceGroup::WhiteFemale => &WHITE_FEMALE,
            PceGroup::BlackMale => &BLACK_MALE,
            PceGroup::BlackFemale => &BLACK_FEMALE,
        }
    }
}

/// One group's terms. Zero means the term is absent for that group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PceCoefficients {
    pub ln_age: f64,
    pub ln_age_sq: f64,
    pub ln_tc: f64,
    pub ln_age_ln_tc: f64,
    pub ln_hdl: f64,
    pub ln_age_ln_hdl: f64,
    pub ln_sbp: Treatment,
    pub ln_age_ln_sbp: Option<Treatment>,
    pub smoker: f64,
    pub diabetes: f64,
    pub mean_linear_predictor: f64,
    pub baseline_survival: f64,
}

pub const WHITE_MALE: PceCoefficients = PceCoefficients {
    ln_age: 12.344,
    ln_age_sq: 0.0,
    ln_tc: 11.853,
    ln_age_ln_tc: -2.664,
    ln_hdl: -7.990,
    ln_age_ln_hdl: 1.769,
    ln_sbp: Treatment::new(1.797, 1.764),
    ln_age_ln_sbp: None,
    smoker: 0.659,
    diabetes: 0.573,
    mean_linear_predictor: 61.18,
    baseline_survival: 0.9144,
};

pub const WHITE_FEMALE: PceCoefficients = PceCoefficients {
    ln_age: -29.799,
    ln_age_sq: 4.884,
    ln_tc: 13.540,
    ln_age_ln_tc: -3.114,
    ln_hdl: -13.578,
    ln_age_ln_hdl: 2.019,
    ln_sbp: Treatment::new(2.020, 1.981),
    ln_age_ln_sbp: None,
    smoker: 0.654,
    diabetes: 0.575,
    mean_linear_predictor: 70.35,
    baseline_survival: 0.9665,
};

pub const BLACK_MALE: PceCoefficients = PceCoefficients {
    ln_age: 2.469,
    ln_age_sq: 0.0,
    ln_tc: 0.302,
    ln_age_ln_tc: 0.0,
    ln_hdl: -0.307,
    ln_age_ln_hdl: 0.0,
    ln_sbp: Treatment::new(1.916, 1.809),
    ln_age_ln_sbp: None,
    smoker: 0.549,
    diabetes: 0.645,
    mean_linear_predictor: 19.54,
    baseline_survival: 0.8954,
};

pub const BLACK_FEMALE: PceCoefficients = PceCoefficients {
    ln_age: 17.114,
    ln_age_sq: 0.0,
    ln_tc: 0.940,
    ln_age_ln_tc: 0.0,
    ln_hdl: -18.920,
    ln_age_ln_hdl: 4.475,
    ln_sbp: Treatment::new(29.291, 27.820),
    ln_age_ln_sbp: Some(Treatment::new(-4.475, -4.256)),
    smoker: 0.691,
    diabetes: 0.874,
    mean_linear_predictor: 86.61,
    baseline_survival: 0.9533,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_selection() {
        assert_eq!(PceGroup::for_patient(Sex::Male, false), PceGroup::WhiteMale);
        assert_eq!(PceGroup::for_patient(Sex::Female, true), PceGroup::BlackFemale);
        assert_eq!(PceGroup::BlackMale.coefficients().baseline_survival, 0.8954);
    }

    #[test]
    fn test_only_black_female_has_age_sbp_interaction() {
        for group in [PceGroup::WhiteMale, PceGroup::WhiteFemale, PceGroup::BlackMale] {
            assert!(group.coefficients().ln_age_ln_sbp.is_none(), "{:?}", group);
        }
        assert!(PceGroup::BlackFemale.coefficients().ln_age_ln_sbp.is_some());
    }
}
