//! Framingham 10-year CHD coefficients (D'Agostino 2008), by sex.

use crate::calculators::Treatment;
use crate::models::Sex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FraminghamCoefficients {
    pub ln_age: f64,
    pub ln_tc: f64,
    pub ln_hdl: f64,
    pub ln_sbp: Treatment,
    pub smoker: f64,
    pub diabetes: f64,
    pub mean_linear_predictor: f64,
    pub baseline_survival: f64,
}

pub const MEN: FraminghamCoefficients = FraminghamCoefficients {
    ln_age: 3.06117,
    ln_tc: 1.1237,
    ln_hdl: -0.93263,
    ln_sbp: Treatment::new(1.93303, 1.99881),
    smoker: 0.65451,
    diabetes: 0.57367,
    mean_linear_predictor: 23.9802,
    baseline_survival: 0.88936,
};

pub const WOMEN: FraminghamCoefficients = FraminghamCoefficients {
    ln_age: 2.32888,
    ln_tc: 1.20904,
    ln_hdl: -0.70833,
    ln_sbp: Treatment::new(2.76157, 2.82263),
    smoker: 0.52873,
    diabetes: 0.69154,
    mean_linear_predictor: 26.1931,
    baseline_survival: 0.95012,
};

pub fn for_sex(sex: Sex) -> &'static FraminghamCoefficients {
    match sex {
        Sex::Male => &MEN,
        Sex::Female => &WOMEN,
    }
}
