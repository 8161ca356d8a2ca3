//! CVD Risk Core Library
//!
//! Deterministic cardiovascular risk evaluation: validated clinical equations
//! plus heuristic risk models, ranked into an explainable top-N list.
//!
//! # Architecture
//!
//! ```text
//! RawInput (form strings)
//!     │
//!     ▼
//! Validation ──── invalid ───▶ { errors: [...] }
//!     │
//!     ▼
//! Normalization (units → mg/dL, enums, BMI)
//!     │
//!     ├──────────────────────────────┐
//!     ▼                              ▼
//! Risk Evaluator                Warning Detector
//!  ├─ BP category                (age, BP, BMI, lipids)
//!  ├─ Diabetes                       │
//!  ├─ ASCVD (PCE) │ Relative <40     │
//!  ├─ Framingham CHD                 │
//!  ├─ WHO CVD (lab / non-lab)        │
//!  └─ Obesity                        │
//!     │                              │
//!     ▼                              │
//! Ranking (stable, by score)         │
//!     │                              │
//!     └──────────────┬───────────────┘
//!                    ▼
//!    { top3, allRisks, errors, warnings }
//! ```
//!
//! # Core Principle
//!
//! **A model that does not apply returns `None`.** Only broken invariants are
//! errors; bad input is reported as data.
//!
//! # Modules
//!
//! - [`models`]: Domain types (RawInput, NormalizedPatient, RiskCandidate, ...)
//! - [`units`]: Cholesterol unit conversion
//! - [`validation`]: Required-field and range checks
//! - [`normalizer`]: Raw input → canonical patient
//! - [`warnings`]: Clinical red-flag detection
//! - [`calculators`]: One pure function per risk model
//! - [`evaluator`]: Model orchestration and ranking
//! - [`assessment`]: End-to-end facade

pub mod assessment;
pub mod calculators;
pub mod config;
pub mod evaluator;
pub mod models;
pub mod normalizer;
pub mod units;
pub mod validation;
pub mod warnings;

// Re-export commonly used types
pub use assessment::{
    AssessmentError, AssessmentResult, PredictionResponse, RiskAssessment, RiskAssessmentService,
    RiskCalculationError,
};
pub use calculators::WhoRegion;
pub use config::AssessmentConfig;
pub use evaluator::{evaluate_risks, rank_top, rank_top3, RiskEvaluator};
pub use models::{
    CholesterolUnit, ClinicalWarning, NormalizedPatient, RawInput, RiskCandidate, RiskLevel,
    WarningCategory, WarningSeverity,
};
pub use normalizer::{NormalizationError, PatientNormalizer};
pub use validation::{validate_patient, ValidationError, ValidationReport};
pub use warnings::{detect_warnings, WarningDetector};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CvdRiskError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Data normalization error: {0}")]
    NormalizationError(String),

    #[error("Risk calculation error: {0}")]
    RiskCalculationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<validation::ValidationError> for CvdRiskError {
    fn from(e: validation::ValidationError) -> Self {
        CvdRiskError::ValidationError(e.to_string())
    }
}

impl From<normalizer::NormalizationError> for CvdRiskError {
    fn from(e: normalizer::NormalizationError) -> Self {
        CvdRiskError::NormalizationError(e.to_string())
    }
}

impl From<assessment::RiskCalculationError> for CvdRiskError {
    fn from(e: assessment::RiskCalculationError) -> Self {
        CvdRiskError::RiskCalculationError(e.to_string())
    }
}

impl From<assessment::AssessmentError> for CvdRiskError {
    fn from(e: assessment::AssessmentError) -> Self {
        match e {
            AssessmentError::Normalization(e) => e.into(),
            AssessmentError::RiskCalculation(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for CvdRiskError {
    fn from(e: serde_json::Error) -> Self {
        CvdRiskError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an engine calibrated for a WHO region (default when `None`).
#[uniffi::export]
pub fn open_engine(region: Option<String>) -> Result<Arc<CvdRiskEngine>, CvdRiskError> {
    let who_region = match region.as_deref() {
        None => WhoRegion::default(),
        Some(name) => WhoRegion::parse(name)
            .ok_or_else(|| CvdRiskError::InvalidInput(format!("Unknown WHO region: {}", name)))?,
    };
    let config = AssessmentConfig::default().with_who_region(who_region);
    Ok(Arc::new(CvdRiskEngine {
        service: RiskAssessmentService::new(config),
    }))
}

/// Convert a cholesterol form value between "mgdL" and "mmolL".
#[uniffi::export]
pub fn convert_cholesterol_value(
    value: String,
    from_unit: String,
    to_unit: String,
) -> Result<String, CvdRiskError> {
    let from = parse_unit(&from_unit)?;
    let to = parse_unit(&to_unit)?;
    Ok(units::convert_cholesterol(&value, from, to))
}

fn parse_unit(unit: &str) -> Result<CholesterolUnit, CvdRiskError> {
    CholesterolUnit::parse(unit)
        .ok_or_else(|| CvdRiskError::InvalidInput(format!("Unknown cholesterol unit: {}", unit)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Stateless assessment engine; safe to share across threads.
#[derive(uniffi::Object)]
pub struct CvdRiskEngine {
    service: RiskAssessmentService,
}

#[uniffi::export]
impl CvdRiskEngine {
    /// Run the full prediction pipeline.
    pub fn predict(&self, input: FfiRawInput) -> Result<FfiPredictionResponse, CvdRiskError> {
        let raw = RawInput::try_from(input)?;
        let response = self.service.predict(&raw)?;
        Ok(response.into())
    }

    /// Validation failures for the input (empty when valid).
    pub fn validate(&self, input: FfiRawInput) -> Result<Vec<FfiValidationIssue>, CvdRiskError> {
        let raw = RawInput::try_from(input)?;
        let report = self.service.validate(&raw);
        Ok(report.errors.into_iter().map(|e| e.into()).collect())
    }

    /// Clinical warnings for valid input.
    pub fn clinical_warnings(&self, input: FfiRawInput) -> Result<Vec<FfiClinicalWarning>, CvdRiskError> {
        let raw = RawInput::try_from(input)?;
        let report = self.service.validate(&raw);
        if let Some(first) = report.errors.into_iter().next() {
            return Err(first.into());
        }
        let patient = PatientNormalizer::new().normalize(&raw)?;
        Ok(self
            .service
            .clinical_warnings(&patient)
            .into_iter()
            .map(|w| w.into())
            .collect())
    }

    /// The WHO region this engine is calibrated for.
    pub fn region(&self) -> String {
        self.service.config().who_region.as_str().to_string()
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe raw form input.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiRawInput {
    pub age: String,
    pub sex_at_birth: String,
    pub race_ethnicity: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub on_bp_meds: String,
    pub has_lab_results: bool,
    /// "mgdL" or "mmolL"; empty means mg/dL
    pub cholesterol_unit: String,
    pub total_cholesterol: String,
    pub hdl_cholesterol: String,
    pub ldl_cholesterol: String,
    pub triglycerides: String,
    pub has_diabetes: String,
    pub glucose_or_a1c: String,
    pub smoking_status: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub bmi: Option<f64>,
    pub family_history_premature_cvd: String,
    pub physical_activity: String,
    pub alcohol_intake: String,
}

impl TryFrom<FfiRawInput> for RawInput {
    type Error = CvdRiskError;

    fn try_from(input: FfiRawInput) -> Result<Self, Self::Error> {
        let cholesterol_unit = if input.cholesterol_unit.trim().is_empty() {
            CholesterolUnit::default()
        } else {
            parse_unit(&input.cholesterol_unit)?
        };

        Ok(RawInput {
            age: input.age,
            sex_at_birth: input.sex_at_birth,
            race_ethnicity: input.race_ethnicity,
            systolic_bp: input.systolic_bp,
            diastolic_bp: input.diastolic_bp,
            on_bp_meds: input.on_bp_meds,
            has_lab_results: input.has_lab_results,
            cholesterol_unit,
            total_cholesterol: input.total_cholesterol,
            hdl_cholesterol: input.hdl_cholesterol,
            ldl_cholesterol: input.ldl_cholesterol,
            triglycerides: input.triglycerides,
            has_diabetes: input.has_diabetes,
            glucose_or_a1c: input.glucose_or_a1c,
            smoking_status: input.smoking_status,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            bmi: input.bmi,
            family_history_premature_cvd: input.family_history_premature_cvd,
            physical_activity: input.physical_activity,
            alcohol_intake: input.alcohol_intake,
        })
    }
}

/// FFI-safe risk candidate.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskCandidate {
    pub id: String,
    pub title: String,
    pub level: String,
    pub score: f64,
    /// Model-specific detail as a JSON object
    pub value_json: String,
    pub why: Vec<String>,
    pub warnings: Vec<String>,
    pub actions: Vec<String>,
}

impl From<RiskCandidate> for FfiRiskCandidate {
    fn from(candidate: RiskCandidate) -> Self {
        Self {
            id: candidate.id,
            title: candidate.title,
            level: candidate.level.as_str().to_string(),
            score: candidate.score,
            value_json: serde_json::Value::Object(candidate.value).to_string(),
            why: candidate.why,
            warnings: candidate.warnings.unwrap_or_default(),
            actions: candidate.actions.unwrap_or_default(),
        }
    }
}

/// FFI-safe prediction response.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPredictionResponse {
    pub top3: Vec<FfiRiskCandidate>,
    pub all_risks: Vec<FfiRiskCandidate>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<PredictionResponse> for FfiPredictionResponse {
    fn from(response: PredictionResponse) -> Self {
        Self {
            top3: response.top3.into_iter().map(|c| c.into()).collect(),
            all_risks: response.all_risks.into_iter().map(|c| c.into()).collect(),
            errors: response.errors,
            warnings: response.warnings,
        }
    }
}

/// FFI-safe validation failure.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiValidationIssue {
    pub field: String,
    pub message: String,
}

impl From<ValidationError> for FfiValidationIssue {
    fn from(error: ValidationError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

/// FFI-safe clinical warning.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClinicalWarning {
    pub severity: String,
    pub category: String,
    pub message: String,
}

impl From<ClinicalWarning> for FfiClinicalWarning {
    fn from(warning: ClinicalWarning) -> Self {
        Self {
            severity: warning.severity.as_str().to_string(),
            category: warning.category.as_str().to_string(),
            message: warning.message,
        }
    }
}
