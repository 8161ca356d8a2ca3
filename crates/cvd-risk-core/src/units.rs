//! Cholesterol unit conversion.
//!
//! mg/dL → mmol/L divides by 38.67 and keeps two decimals; mmol/L → mg/dL
//! multiplies by 38.67 and rounds to a whole number. The two directions are
//! not exact inverses: a round trip may drift by up to ~0.5 mg/dL.

use crate::models::{parse_decimal, CholesterolUnit};

/// mg/dL per mmol/L of cholesterol.
pub const CHOLESTEROL_FACTOR: f64 = 38.67;

/// Convert mg/dL to mmol/L, two decimals.
pub fn mgdl_to_mmoll(mg_dl: f64) -> f64 {
    round_to(mg_dl / CHOLESTEROL_FACTOR, 2)
}

/// Convert mmol/L to mg/dL, whole number.
pub fn mmoll_to_mgdl(mmol_l: f64) -> f64 {
    (mmol_l * CHOLESTEROL_FACTOR).round()
}

/// Convert a form value between units.
///
/// Returns the input untouched when the units match or the value is empty
/// or not a number.
pub fn convert_cholesterol(value: &str, from: CholesterolUnit, to: CholesterolUnit) -> String {
    if from == to {
        return value.to_string();
    }
    let Some(number) = parse_decimal(value) else {
        return value.to_string();
    };

    let converted = match (from, to) {
        (CholesterolUnit::MgDl, CholesterolUnit::MmolL) => mgdl_to_mmoll(number),
        (CholesterolUnit::MmolL, CholesterolUnit::MgDl) => mmoll_to_mgdl(number),
        _ => number,
    };
    converted.to_string()
}

/// Display label for a unit.
pub fn unit_label(unit: CholesterolUnit) -> &'static str {
    unit.label()
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
