//! Clinical red-flag detection.
//!
//! Runs straight off the normalized patient, independent of the risk models.
//! Output order is stable: age, blood pressure, BMI, lipids.

use crate::models::{ClinicalWarning, NormalizedPatient, WarningCategory, WarningSeverity};

const SBP_VERY_LOW: i32 = 90;
const SBP_EXTREMELY_LOW: i32 = 70;
const SBP_VERY_HIGH: i32 = 180;
const DBP_VERY_HIGH: i32 = 120;
const BMI_CLASS_III: f64 = 40.0;
const BMI_SEVERE: f64 = 35.0;
/// mg/dL
const TOTAL_CHOLESTEROL_ELEVATED: f64 = 240.0;
/// mg/dL
const HDL_LOW: f64 = 40.0;

/// Detector for clinical warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarningDetector;

impl WarningDetector {
    pub fn new() -> Self {
        Self
    }

    /// Every warning that applies to the patient.
    pub fn detect(&self, patient: &NormalizedPatient) -> Vec<ClinicalWarning> {
        let mut warnings = Vec::new();
        self.check_age(patient, &mut warnings);
        self.check_blood_pressure(patient, &mut warnings);
        self.check_body_composition(patient, &mut warnings);
        self.check_lipids(patient, &mut warnings);
        warnings
    }

    /// Only the critical warnings.
    pub fn critical_warnings(&self, patient: &NormalizedPatient) -> Vec<ClinicalWarning> {
        self.detect(patient)
            .into_iter()
            .filter(ClinicalWarning::is_critical)
            .collect()
    }

    fn check_age(&self, patient: &NormalizedPatient, out: &mut Vec<ClinicalWarning>) {
        if patient.age < 20 {
            out.push(ClinicalWarning::new(
                WarningSeverity::Warning,
                WarningCategory::Age,
                "Age is below validated range (20-79). ASCVD equations are not validated for this age.",
            ));
        } else if patient.age >= 75 {
            out.push(ClinicalWarning::new(
                WarningSeverity::Info,
                WarningCategory::Age,
                "Age exceeds validated range (20-79). Results may be less reliable.",
            ));
        }
    }

    fn check_blood_pressure(&self, patient: &NormalizedPatient, out: &mut Vec<ClinicalWarning>) {
        let sbp = patient.systolic_bp;

        if sbp < SBP_VERY_LOW {
            out.push(ClinicalWarning::new(
                WarningSeverity::Critical,
                WarningCategory::BloodPressure,
                format!(
                    "Systolic BP of {} mmHg is very low (<90 mmHg). Please verify measurement accuracy.",
                    sbp
                ),
            ));
            if patient.on_bp_meds() {
                out.push(ClinicalWarning::new(
                    WarningSeverity::Critical,
                    WarningCategory::BloodPressure,
                    "Possible data entry error: Low BP with BP medications marked 'yes'. Please re-check measurements.",
                ));
            }
            if sbp < SBP_EXTREMELY_LOW {
                out.push(ClinicalWarning::new(
                    WarningSeverity::Critical,
                    WarningCategory::BloodPressure,
                    format!(
                        "Systolic BP of {} mmHg is extremely low. Please verify measurement accuracy.",
                        sbp
                    ),
                ));
            }
        }

        if sbp > SBP_VERY_HIGH {
            out.push(ClinicalWarning::new(
                WarningSeverity::Critical,
                WarningCategory::BloodPressure,
                format!(
                    "Systolic BP of {} mmHg is very high (>180 mmHg). Consider immediate medical evaluation.",
                    sbp
                ),
            ));
        }

        if let Some(dbp) = patient.diastolic_bp.filter(|d| *d > DBP_VERY_HIGH) {
            out.push(ClinicalWarning::new(
                WarningSeverity::Critical,
                WarningCategory::BloodPressure,
                format!(
                    "Diastolic BP of {} mmHg is very high (>120 mmHg). Consider immediate medical evaluation.",
                    dbp
                ),
            ));
        }
    }

    fn check_body_composition(&self, patient: &NormalizedPatient, out: &mut Vec<ClinicalWarning>) {
        let Some(bmi) = patient.bmi else {
            return;
        };

        if bmi > BMI_CLASS_III {
            out.push(ClinicalWarning::new(
                WarningSeverity::Critical,
                WarningCategory::BodyComposition,
                "BMI >40 indicates severe obesity (Class III), a major cardiometabolic risk factor requiring immediate attention.",
            ));
        } else if bmi > BMI_SEVERE {
            out.push(ClinicalWarning::new(
                WarningSeverity::Warning,
                WarningCategory::BodyComposition,
                "BMI ≥35 indicates severe obesity, a major cardiometabolic risk factor.",
            ));
        }
    }

    fn check_lipids(&self, patient: &NormalizedPatient, out: &mut Vec<ClinicalWarning>) {
        if !patient.has_lab_results {
            return;
        }

        if let Some(tc) = patient.total_cholesterol.filter(|tc| *tc > TOTAL_CHOLESTEROL_ELEVATED) {
            out.push(ClinicalWarning::new(
                WarningSeverity::Warning,
                WarningCategory::Lipids,
                format!(
                    "Total cholesterol of {} mg/dL is elevated—this increases cardiovascular risk.",
                    tc
                ),
            ));
        }

        if let Some(hdl) = patient.hdl_cholesterol.filter(|hdl| *hdl < HDL_LOW) {
            out.push(ClinicalWarning::new(
                WarningSeverity::Warning,
                WarningCategory::Lipids,
                format!(
                    "HDL cholesterol of {} mg/dL is low—aim for ≥40 mg/dL (men) or ≥50 mg/dL (women) to reduce risk.",
                    hdl
                ),
            ));
        }
    }
}

/// Detect warnings with the default detector.
pub fn detect_warnings(patient: &NormalizedPatient) -> Vec<ClinicalWarning> {
    WarningDetector::new().detect(patient)
}
