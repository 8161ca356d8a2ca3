//! Assessment facade.
//!
//! Pipeline: Validation → Normalization → Warning Detection → Evaluation → Ranking

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::AssessmentConfig;
use crate::evaluator::RiskEvaluator;
use crate::models::{ClinicalWarning, NormalizedPatient, RawInput, RiskCandidate};
use crate::normalizer::{NormalizationError, PatientNormalizer};
use crate::validation::{validate_patient, ValidationReport};
use crate::warnings::WarningDetector;

/// Integrity failures of the evaluation step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskCalculationError {
    #[error("No risk factors could be calculated")]
    NoCandidates,
}

/// Failures past validation. Both indicate a defect, not bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Data normalization failed: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Risk calculation failed: {0}")]
    RiskCalculation(#[from] RiskCalculationError),
}

pub type AssessmentResult<T> = Result<T, AssessmentError>;

/// Ranked risks for one normalized patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Highest `top_n` candidates from the config (3 by default); the field
    /// keeps its wire name whatever `top_n` is
    pub top3: Vec<RiskCandidate>,
    pub all_risks: Vec<RiskCandidate>,
    /// Per-candidate warnings, flattened in evaluation order
    pub warnings: Vec<String>,
}

/// Outcome of the full pipeline over raw input.
///
/// `errors` is non-empty only when validation failed, in which case every
/// other list is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Highest `top_n` candidates, as in [`RiskAssessment::top3`]
    pub top3: Vec<RiskCandidate>,
    pub all_risks: Vec<RiskCandidate>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PredictionResponse {
    /// Response for a submission that failed validation.
    pub fn invalid(report: &ValidationReport) -> Self {
        Self {
            errors: report.messages(),
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Service that runs assessments end to end.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessmentService {
    normalizer: PatientNormalizer,
    detector: WarningDetector,
    evaluator: RiskEvaluator,
}

impl RiskAssessmentService {
    /// Create a new service.
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            normalizer: PatientNormalizer::new(),
            detector: WarningDetector::new(),
            evaluator: RiskEvaluator::new(config),
        }
    }

    pub fn config(&self) -> &AssessmentConfig {
        self.evaluator.config()
    }

    /// Evaluate and rank every applicable model.
    pub fn assess(&self, patient: &NormalizedPatient) -> Result<RiskAssessment, RiskCalculationError> {
        let all_risks = self.evaluator.evaluate_risks(patient);
        if all_risks.is_empty() {
            error!(age = patient.age, "no risk model produced a candidate");
            return Err(RiskCalculationError::NoCandidates);
        }

        let top3 = self.evaluator.rank(&all_risks);
        let warnings: Vec<String> = all_risks
            .iter()
            .flat_map(|c| c.warning_messages().iter().cloned())
            .collect();

        info!(
            candidates = all_risks.len(),
            top = top3.first().map(|c| c.id.as_str()).unwrap_or_default(),
            "risk assessment complete"
        );

        Ok(RiskAssessment {
            top3,
            all_risks,
            warnings,
        })
    }

    /// Re-evaluate and return the candidate with the given id, if it applies.
    pub fn risk_by_id(&self, patient: &NormalizedPatient, id: &str) -> Option<RiskCandidate> {
        self.evaluator
            .evaluate_risks(patient)
            .into_iter()
            .find(|c| c.id == id)
    }

    /// Clinical red flags for the patient.
    pub fn clinical_warnings(&self, patient: &NormalizedPatient) -> Vec<ClinicalWarning> {
        self.detector.detect(patient)
    }

    /// Validate raw input. Field names of failures are logged, never values.
    pub fn validate(&self, raw: &RawInput) -> ValidationReport {
        let report = validate_patient(raw);
        if !report.is_valid {
            warn!(fields = ?report.fields(), "patient input failed validation");
        }
        report
    }

    /// Run the full pipeline.
    ///
    /// Invalid input is reported in the response, not as an error. Warnings
    /// list candidate warnings first, then clinical warnings.
    pub fn predict(&self, raw: &RawInput) -> AssessmentResult<PredictionResponse> {
        let report = self.validate(raw);
        if !report.is_valid {
            return Ok(PredictionResponse::invalid(&report));
        }

        let patient = self.normalizer.normalize(raw)?;
        let clinical = self.clinical_warnings(&patient);
        let assessment = self.assess(&patient)?;

        let mut warnings = assessment.warnings;
        warnings.extend(clinical.into_iter().map(|w| w.message));

        Ok(PredictionResponse {
            top3: assessment.top3,
            all_risks: assessment.all_risks,
            errors: Vec::new(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sex, SmokingStatus, YesNo};

    fn raw_input() -> RawInput {
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
    fn test_assess_ranks_and_collects() {
        let service = RiskAssessmentService::default();
        let mut patient = NormalizedPatient::new(30, Sex::Male, 185);
        patient.smoking_status = SmokingStatus::Current;

        let assessment = service.assess(&patient).unwrap();
        assert_eq!(assessment.top3.len(), 3);
        assert_eq!(assessment.top3[0].id, "bp_category");
        assert!(assessment.all_risks.len() >= assessment.top3.len());
        assert_eq!(
            assessment.warnings,
            vec![
                "Immediate medical evaluation recommended".to_string(),
                crate::calculators::relative::RELATIVE_RISK_WARNING.to_string(),
            ]
        );
    }

    #[test]
    fn test_assess_uses_configured_top_n() {
        let patient = PatientNormalizer::new().normalize(&raw_input()).unwrap();

        let default = RiskAssessmentService::default().assess(&patient).unwrap();
        assert_eq!(default.all_risks.len(), 5);
        assert_eq!(default.top3.len(), 3);

        let wide = RiskAssessmentService::new(AssessmentConfig::default().with_top_n(4))
            .assess(&patient)
            .unwrap();
        assert_eq!(wide.top3.len(), 4);
        assert_eq!(wide.top3[..3], default.top3[..]);

        let single = RiskAssessmentService::new(AssessmentConfig::default().with_top_n(1))
            .assess(&patient)
            .unwrap();
        assert_eq!(single.top3, default.top3[..1]);
    }

    #[test]
    fn test_predict_valid() {
        let service = RiskAssessmentService::default();
        let response = service.predict(&raw_input()).unwrap();

        assert!(response.is_valid());
        assert_eq!(response.top3.len(), 3);
        assert!(response.all_risks.iter().any(|c| c.id == "ascvd_10yr"));
        // 240 mg/dL total cholesterol is not above the warning threshold
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_predict_invalid() {
        let service = RiskAssessmentService::default();
        let mut raw = raw_input();
        raw.age = "".into();

        let response = service.predict(&raw).unwrap();
        assert!(!response.is_valid());
        assert_eq!(response.errors, vec!["Age is required".to_string()]);
        assert!(response.top3.is_empty());
        assert!(response.all_risks.is_empty());
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_predict_appends_clinical_warnings() {
        let service = RiskAssessmentService::default();
        let mut raw = raw_input();
        raw.systolic_bp = "190".into();

        let response = service.predict(&raw).unwrap();
        assert_eq!(response.warnings[0], "Immediate medical evaluation recommended");
        assert!(response.warnings[1].starts_with("Systolic BP of 190 mmHg is very high"));
    }

    #[test]
    fn test_predict_surfaces_normalization_defect() {
        let service = RiskAssessmentService::default();
        let mut raw = raw_input();
        raw.sex_at_birth = "unknown".into();

        let err = service.predict(&raw).unwrap_err();
        assert!(matches!(err, AssessmentError::Normalization(ref e) if e.field == "sexAtBirth"));
    }

    #[test]
    fn test_risk_by_id() {
        let service = RiskAssessmentService::default();
        let mut patient = NormalizedPatient::new(50, Sex::Female, 120);
        patient.has_diabetes = YesNo::Yes;

        let diabetes = service.risk_by_id(&patient, "diabetes").unwrap();
        assert_eq!(diabetes.title, "Diabetes as Cardiovascular Risk Factor");
        assert!(service.risk_by_id(&patient, "ascvd_10yr").is_none());
        assert!(service.risk_by_id(&patient, "nonexistent").is_none());
    }
}
