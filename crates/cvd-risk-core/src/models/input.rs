//! Raw patient input as submitted by the assessment form.

use serde::{Deserialize, Serialize};

/// Unit the patient entered lipid values in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CholesterolUnit {
    /// Milligrams per decilitre
    #[default]
    #[serde(rename = "mgdL")]
    MgDl,
    /// Millimoles per litre
    #[serde(rename = "mmolL")]
    MmolL,
}

impl CholesterolUnit {
    /// Display label for the unit.
    pub fn label(&self) -> &'static str {
        match self {
            CholesterolUnit::MgDl => "mg/dL",
            CholesterolUnit::MmolL => "mmol/L",
        }
    }

    /// Parse the wire form ("mgdL" / "mmolL").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "mgdL" => Some(CholesterolUnit::MgDl),
            "mmolL" => Some(CholesterolUnit::MmolL),
            _ => None,
        }
    }
}

/// Untyped form data for one assessment.
///
/// Every scalar is a string that may be empty. Nothing here is trusted until
/// it has passed validation and normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    // Demographics
    pub age: String,
    pub sex_at_birth: String,
    pub race_ethnicity: String,

    // Vital signs
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub on_bp_meds: String,

    // Lipids
    pub has_lab_results: bool,
    pub cholesterol_unit: CholesterolUnit,
    pub total_cholesterol: String,
    pub hdl_cholesterol: String,
    pub ldl_cholesterol: String,
    pub triglycerides: String,

    // Metabolic
    pub has_diabetes: String,
    pub glucose_or_a1c: String,

    // Smoking
    pub smoking_status: String,

    // Body composition
    pub height_cm: String,
    pub weight_kg: String,
    /// BMI pre-computed by the client, if any
    pub bmi: Option<f64>,

    // Family history
    pub family_history_premature_cvd: String,

    // Lifestyle
    pub physical_activity: String,
    pub alcohol_intake: String,
}

/// True when a form field carries no value.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a decimal form value. Empty or non-numeric input yields `None`.
pub(crate) fn parse_decimal(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse an integer form value, truncating any fractional part ("120.6" → 120).
pub(crate) fn parse_integer(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if let Ok(v) = trimmed.parse::<i32>() {
        return Some(v);
    }
    parse_decimal(trimmed)
        .map(f64::trunc)
        .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map(|v| v as i32)
}
