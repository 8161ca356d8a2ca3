//! Patient normalizer.
//!
//! Handles:
//! - Integer/decimal parsing of form strings
//! - Lipid unit conversion (everything ends up in mg/dL)
//! - Enum parsing of categorical answers
//! - BMI derivation from height and weight

use thiserror::Error;

use crate::models::{
    is_blank, parse_decimal, parse_integer, ActivityLevel, AlcoholIntake, CholesterolUnit,
    FamilyHistory, NormalizedPatient, RawInput, RaceEthnicity, Sex, SmokingStatus, YesNo,
};
use crate::units::{mmoll_to_mgdl, round_to};

/// A field that validation should have guaranteed could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NormalizationError {
    pub field: String,
    pub message: String,
}

impl NormalizationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type NormalizationResult<T> = Result<T, NormalizationError>;

/// Normalizer for validated form input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientNormalizer;

impl PatientNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Build the canonical patient record.
    ///
    /// Assumes `raw` passed validation; an error here means the two disagree.
    pub fn normalize(&self, raw: &RawInput) -> NormalizationResult<NormalizedPatient> {
        let age = parse_integer(&raw.age)
            .ok_or_else(|| NormalizationError::new("age", "Age must be a valid number"))?;
        let systolic_bp = parse_integer(&raw.systolic_bp).ok_or_else(|| {
            NormalizationError::new("systolicBp", "Systolic BP must be a valid number")
        })?;
        let diastolic_bp = if is_blank(&raw.diastolic_bp) {
            None
        } else {
            Some(parse_integer(&raw.diastolic_bp).ok_or_else(|| {
                NormalizationError::new("diastolicBp", "Diastolic BP must be a valid number")
            })?)
        };

        let unit = raw.cholesterol_unit;
        let height_cm = parse_decimal(&raw.height_cm);
        let weight_kg = parse_decimal(&raw.weight_kg);

        Ok(NormalizedPatient {
            age,
            sex_at_birth: required_choice("sexAtBirth", &raw.sex_at_birth, Sex::parse)?,
            race_ethnicity: optional_choice("raceEthnicity", &raw.race_ethnicity, RaceEthnicity::parse)?,
            systolic_bp,
            diastolic_bp,
            on_bp_meds: required_choice("onBpMeds", &raw.on_bp_meds, YesNo::parse)?,
            has_lab_results: raw.has_lab_results,
            total_cholesterol: self.normalize_lipid(&raw.total_cholesterol, unit),
            hdl_cholesterol: self.normalize_lipid(&raw.hdl_cholesterol, unit),
            ldl_cholesterol: self.normalize_lipid(&raw.ldl_cholesterol, unit),
            triglycerides: self.normalize_lipid(&raw.triglycerides, unit),
            has_diabetes: required_choice("hasDiabetes", &raw.has_diabetes, YesNo::parse)?,
            glucose_or_a1c: (!is_blank(&raw.glucose_or_a1c)).then(|| raw.glucose_or_a1c.clone()),
            smoking_status: required_choice("smokingStatus", &raw.smoking_status, SmokingStatus::parse)?,
            height_cm,
            weight_kg,
            bmi: raw
                .bmi
                .filter(|b| b.is_finite() && *b > 0.0)
                .or_else(|| self.calculate_bmi(height_cm, weight_kg)),
            family_history_premature_cvd: optional_choice(
                "familyHistoryPrematureCvd",
                &raw.family_history_premature_cvd,
                FamilyHistory::parse,
            )?,
            physical_activity: optional_choice("physicalActivity", &raw.physical_activity, ActivityLevel::parse)?,
            alcohol_intake: optional_choice("alcoholIntake", &raw.alcohol_intake, AlcoholIntake::parse)?,
        })
    }

    /// Convert a lipid value to whole mg/dL. Empty or non-numeric input yields `None`.
    pub fn normalize_lipid(&self, value: &str, unit: CholesterolUnit) -> Option<f64> {
        let number = parse_decimal(value)?;
        Some(match unit {
            CholesterolUnit::MmolL => mmoll_to_mgdl(number),
            CholesterolUnit::MgDl => number.round(),
        })
    }

    /// BMI to one decimal, or `None` unless both measurements are positive.
    pub fn calculate_bmi(&self, height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
        let (height_cm, weight_kg) = (height_cm?, weight_kg?);
        if height_cm <= 0.0 || weight_kg <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        Some(round_to(weight_kg / (height_m * height_m), 1))
    }
}

fn required_choice<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> NormalizationResult<T> {
    parse(value).ok_or_else(|| {
        NormalizationError::new(field, format!("Unrecognized value for {}: {:?}", field, value))
    })
}

fn optional_choice<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> NormalizationResult<Option<T>> {
    if is_blank(value) {
        return Ok(None);
    }
    required_choice(field, value, parse).map(Some)
}
