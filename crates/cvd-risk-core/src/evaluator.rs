//! Runs every applicable risk model and ranks the results.

use std::cmp::Ordering;

use tracing::debug;

use crate::calculators::{
    calculate_ascvd_risk, calculate_bp_risk, calculate_diabetes_risk, calculate_framingham_risk,
    calculate_obesity_risk, calculate_relative_risk, calculate_who_cvd_risk,
};
use crate::config::{AssessmentConfig, DEFAULT_TOP_N};
use crate::models::{NormalizedPatient, RiskCandidate};

/// Below this age the relative risk summary replaces the ASCVD estimate.
pub const RELATIVE_RISK_MAX_AGE: i32 = 40;

/// Evaluator for the full set of risk models.
#[derive(Debug, Clone, Default)]
pub struct RiskEvaluator {
    config: AssessmentConfig,
}

impl RiskEvaluator {
    /// Create a new evaluator.
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Every applicable candidate, in evaluation order.
    ///
    /// BP and diabetes always apply. Exactly one of ASCVD and the relative
    /// risk summary is present for patients under 40.
    pub fn evaluate_risks(&self, patient: &NormalizedPatient) -> Vec<RiskCandidate> {
        let mut candidates = vec![calculate_bp_risk(patient), calculate_diabetes_risk(patient)];

        match calculate_ascvd_risk(patient) {
            Some(ascvd) => candidates.push(ascvd),
            None if patient.age < RELATIVE_RISK_MAX_AGE => {
                candidates.push(calculate_relative_risk(patient))
            }
            None => {}
        }

        candidates.extend(calculate_framingham_risk(patient));
        candidates.extend(calculate_who_cvd_risk(patient, self.config.who_region));
        candidates.extend(calculate_obesity_risk(patient));

        debug!(
            count = candidates.len(),
            ids = ?candidates.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            "evaluated risk models"
        );
        candidates
    }

    /// The configured number of top candidates.
    pub fn rank(&self, candidates: &[RiskCandidate]) -> Vec<RiskCandidate> {
        rank_top(candidates, self.config.top_n)
    }
}

/// Highest `n` candidates by score. Ties keep their evaluation order.
pub fn rank_top(candidates: &[RiskCandidate], n: usize) -> Vec<RiskCandidate> {
    let mut ranked = candidates.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Highest three candidates by score.
pub fn rank_top3(candidates: &[RiskCandidate]) -> Vec<RiskCandidate> {
    rank_top(candidates, DEFAULT_TOP_N)
}

/// Evaluate with the default configuration.
pub fn evaluate_risks(patient: &NormalizedPatient) -> Vec<RiskCandidate> {
    RiskEvaluator::default().evaluate_risks(patient)
}
