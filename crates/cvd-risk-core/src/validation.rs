//! Structural and range validation of raw form input.
//!
//! Every rule is evaluated; a report lists all failures, not just the first.
//! Range checks only run when the field is present.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{is_blank, parse_decimal, parse_integer, CholesterolUnit, RawInput};

/// A user-correctable problem with one form field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Form field the message refers to (camelCase, as submitted)
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub is_valid: bool,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }

    /// The error messages, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Fields with at least one error, in rule order, without repeats.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }
}

/// Inclusive numeric bounds with the message shown when violated.
struct Bounds {
    min: f64,
    max: f64,
    message: &'static str,
}

impl Bounds {
    fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

const AGE_BOUNDS: Bounds = Bounds {
    min: 20.0,
    max: 79.0,
    message: "Age must be between 20 and 79 years",
};

const SYSTOLIC_BOUNDS: Bounds = Bounds {
    min: 50.0,
    max: 300.0,
    message: "Systolic BP must be between 50 and 300 mmHg",
};

const DIASTOLIC_BOUNDS: Bounds = Bounds {
    min: 30.0,
    max: 200.0,
    message: "Diastolic BP must be between 30 and 200 mmHg",
};

fn total_cholesterol_bounds(unit: CholesterolUnit) -> Bounds {
    match unit {
        CholesterolUnit::MgDl => Bounds {
            min: 100.0,
            max: 400.0,
            message: "Total cholesterol must be between 100 and 400 mg/dL",
        },
        CholesterolUnit::MmolL => Bounds {
            min: 2.6,
            max: 10.3,
            message: "Total cholesterol must be between 2.6 and 10.3 mmol/L",
        },
    }
}

fn hdl_cholesterol_bounds(unit: CholesterolUnit) -> Bounds {
    match unit {
        CholesterolUnit::MgDl => Bounds {
            min: 10.0,
            max: 100.0,
            message: "HDL cholesterol must be between 10 and 100 mg/dL",
        },
        CholesterolUnit::MmolL => Bounds {
            min: 0.26,
            max: 2.6,
            message: "HDL cholesterol must be between 0.26 and 2.6 mmol/L",
        },
    }
}

/// Check that every required field carries a value.
pub fn validate_required_fields(raw: &RawInput) -> Vec<ValidationError> {
    let required: [(&str, &str, &str); 6] = [
        ("age", "Age", raw.age.as_str()),
        ("sexAtBirth", "Sex assigned at birth", raw.sex_at_birth.as_str()),
        ("systolicBp", "Systolic blood pressure", raw.systolic_bp.as_str()),
        ("onBpMeds", "BP medication status", raw.on_bp_meds.as_str()),
        ("hasDiabetes", "Diabetes status", raw.has_diabetes.as_str()),
        ("smokingStatus", "Smoking status", raw.smoking_status.as_str()),
    ];

    let mut errors: Vec<ValidationError> = required
        .iter()
        .filter(|(_, _, value)| is_blank(value))
        .map(|(field, name, _)| ValidationError::new(field, format!("{} is required", name)))
        .collect();

    if raw.has_lab_results {
        if is_blank(&raw.total_cholesterol) {
            errors.push(ValidationError::new(
                "totalCholesterol",
                "Total cholesterol is required when lab results are available",
            ));
        }
        if is_blank(&raw.hdl_cholesterol) {
            errors.push(ValidationError::new(
                "hdlCholesterol",
                "HDL cholesterol is required when lab results are available",
            ));
        }
    }

    errors
}

/// Check numeric ranges of the fields that are present.
///
/// Age and blood pressure must also be numbers: the normalizer relies on
/// them parsing. Lipids that are not numbers are left for the normalizer to
/// drop.
pub fn validate_numeric_ranges(raw: &RawInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let integer_checks = [
        ("age", &raw.age, &AGE_BOUNDS),
        ("systolicBp", &raw.systolic_bp, &SYSTOLIC_BOUNDS),
        ("diastolicBp", &raw.diastolic_bp, &DIASTOLIC_BOUNDS),
    ];
    for (field, value, bounds) in integer_checks {
        if is_blank(value) {
            continue;
        }
        let in_range = parse_integer(value).is_some_and(|v| bounds.contains(v as f64));
        if !in_range {
            errors.push(ValidationError::new(field, bounds.message));
        }
    }

    if raw.has_lab_results {
        let unit = raw.cholesterol_unit;
        let lipid_checks = [
            ("totalCholesterol", &raw.total_cholesterol, total_cholesterol_bounds(unit)),
            ("hdlCholesterol", &raw.hdl_cholesterol, hdl_cholesterol_bounds(unit)),
        ];
        for (field, value, bounds) in lipid_checks {
            if let Some(v) = parse_decimal(value) {
                if !bounds.contains(v) {
                    errors.push(ValidationError::new(field, bounds.message));
                }
            }
        }
    }

    errors
}

/// Validate a submission against every rule.
pub fn validate_patient(raw: &RawInput) -> ValidationReport {
    let mut errors = validate_required_fields(raw);
    errors.extend(validate_numeric_ranges(raw));
    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawInput {
        RawInput {
            age: "55".into(),
            sex_at_birth: "male".into(),
            systolic_bp: "150".into(),
            on_bp_meds: "no".into(),
            has_lab_results: true,
            total_cholesterol: "240".into(),
            hdl_cholesterol: "45".into(),
            has_diabetes: "no".into(),
            smoking_status: "current".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let report = validate_patient(&valid_input());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_age() {
        let mut raw = valid_input();
        raw.age = "".into();

        let report = validate_patient(&raw);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "age");
        assert_eq!(report.messages(), vec!["Age is required".to_string()]);
    }

    #[test]
    fn test_reports_every_failure() {
        let raw = RawInput {
            has_lab_results: true,
            ..Default::default()
        };

        let report = validate_patient(&raw);
        assert_eq!(
            report.fields(),
            vec![
                "age",
                "sexAtBirth",
                "systolicBp",
                "onBpMeds",
                "hasDiabetes",
                "smokingStatus",
                "totalCholesterol",
                "hdlCholesterol",
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut raw = valid_input();
        raw.smoking_status = "   ".into();
        let report = validate_patient(&raw);
        assert_eq!(report.messages(), vec!["Smoking status is required".to_string()]);
    }

    #[test]
    fn test_lab_fields_only_required_with_labs() {
        let mut raw = valid_input();
        raw.has_lab_results = false;
        raw.total_cholesterol = "".into();
        raw.hdl_cholesterol = "".into();
        assert!(validate_patient(&raw).is_valid);
    }

    #[test]
    fn test_age_range() {
        for (age, valid) in [("19", false), ("20", true), ("79", true), ("80", false), ("old", false)] {
            let mut raw = valid_input();
            raw.age = age.into();
            let report = validate_patient(&raw);
            assert_eq!(report.is_valid, valid, "age {}", age);
            if !valid {
                assert_eq!(report.errors[0].message, "Age must be between 20 and 79 years");
            }
        }
    }

    #[test]
    fn test_blood_pressure_ranges() {
        let mut raw = valid_input();
        raw.systolic_bp = "310".into();
        raw.diastolic_bp = "25".into();

        let report = validate_patient(&raw);
        assert_eq!(report.fields(), vec!["systolicBp", "diastolicBp"]);

        raw.systolic_bp = "50".into();
        raw.diastolic_bp = "".into();
        assert!(validate_patient(&raw).is_valid);
    }

    #[test]
    fn test_cholesterol_ranges_follow_unit() {
        let mut raw = valid_input();
        raw.total_cholesterol = "6.2".into();
        raw.hdl_cholesterol = "1.2".into();

        // mg/dL bounds reject mmol/L-sized values
        let report = validate_patient(&raw);
        assert_eq!(report.fields(), vec!["totalCholesterol", "hdlCholesterol"]);
        assert_eq!(
            report.errors[0].message,
            "Total cholesterol must be between 100 and 400 mg/dL"
        );

        raw.cholesterol_unit = CholesterolUnit::MmolL;
        assert!(validate_patient(&raw).is_valid);

        raw.hdl_cholesterol = "3.0".into();
        let report = validate_patient(&raw);
        assert_eq!(
            report.messages(),
            vec!["HDL cholesterol must be between 0.26 and 2.6 mmol/L".to_string()]
        );
    }

    #[test]
    fn test_non_numeric_lipids_skip_range_check() {
        let mut raw = valid_input();
        raw.total_cholesterol = "unknown".into();
        assert!(validate_patient(&raw).is_valid);
    }

    #[test]
    fn test_error_display_is_message() {
        let error = ValidationError::new("age", "Age is required");
        assert_eq!(error.to_string(), "Age is required");
    }
}
