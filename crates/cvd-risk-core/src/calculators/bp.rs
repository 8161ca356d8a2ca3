//! Blood pressure category (ACC/AHA).
//!
//! Categories are checked in ascending systolic order and the first match
//! wins. A systolic of 180 or more is always a crisis. Below that, a present
//! diastolic reading can move the category down to hypotension or up to
//! stage 1 or 2; a missing one never changes it.

use crate::models::{NormalizedPatient, RiskCandidate, RiskLevel};
use tracing::debug;

/// Blood pressure category, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpCategory {
    Hypotension,
    Normal,
    Elevated,
    Stage1Hypertension,
    Stage2Hypertension,
    HypertensiveCrisis,
}

impl BpCategory {
    /// Classify a reading.
    pub fn classify(sbp: i32, dbp: Option<i32>) -> Self {
        let dbp_below = |limit: i32| dbp.map_or(true, |d| d < limit);

        if sbp >= 180 {
            BpCategory::HypertensiveCrisis
        } else if sbp < 90 || dbp.is_some_and(|d| d < 60) {
            BpCategory::Hypotension
        } else if sbp < 120 && dbp_below(80) {
            BpCategory::Normal
        } else if sbp < 130 && dbp_below(80) {
            BpCategory::Elevated
        } else if sbp < 140 || dbp_below(90) {
            BpCategory::Stage1Hypertension
        } else {
            BpCategory::Stage2Hypertension
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BpCategory::Hypotension => "Hypotension",
            BpCategory::Normal => "Normal",
            BpCategory::Elevated => "Elevated",
            BpCategory::Stage1Hypertension => "Stage 1 Hypertension",
            BpCategory::Stage2Hypertension => "Stage 2 Hypertension",
            BpCategory::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }

    pub fn level(&self) -> RiskLevel {
        match self {
            BpCategory::Hypotension | BpCategory::Normal => RiskLevel::Low,
            BpCategory::Elevated => RiskLevel::Borderline,
            BpCategory::Stage1Hypertension => RiskLevel::Intermediate,
            BpCategory::Stage2Hypertension => RiskLevel::High,
            BpCategory::HypertensiveCrisis => RiskLevel::Critical,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            BpCategory::Hypotension => 0.15,
            BpCategory::Normal => 0.2,
            BpCategory::Elevated => 0.35,
            BpCategory::Stage1Hypertension => 0.55,
            BpCategory::Stage2Hypertension => 0.75,
            BpCategory::HypertensiveCrisis => 0.95,
        }
    }
}

/// Blood pressure status. Always applies.
pub fn calculate_bp_risk(patient: &NormalizedPatient) -> RiskCandidate {
    let sbp = patient.systolic_bp;
    let dbp = patient.diastolic_bp;
    let category = BpCategory::classify(sbp, dbp);
    let level = category.level();
    debug!(model = "bp_category", sbp, ?dbp, category = category.label(), "calculated");

    let mut why = Vec::new();
    let mut warnings = Vec::new();
    match category {
        BpCategory::Hypotension => {
            why.push(format!("SBP {} mmHg (very low)", sbp));
            warnings.push("Very low BP may indicate measurement error or underlying condition".to_string());
        }
        BpCategory::Normal => why.push(format!("SBP {} mmHg (normal range)", sbp)),
        BpCategory::Elevated => why.push(format!("SBP {} mmHg (elevated)", sbp)),
        BpCategory::Stage1Hypertension => {
            why.push(format!("SBP {} mmHg (Stage 1)", sbp));
            if patient.on_bp_meds() {
                why.push("Currently on BP medication".to_string());
            }
        }
        BpCategory::Stage2Hypertension => {
            why.push(format!("SBP {} mmHg (Stage 2)", sbp));
            if patient.on_bp_meds() {
                warnings.push("BP remains elevated despite medication - may need adjustment".to_string());
            }
        }
        BpCategory::HypertensiveCrisis => {
            why.push(format!("SBP {} mmHg (crisis level)", sbp));
            warnings.push("Immediate medical evaluation recommended".to_string());
        }
    }

    let actions: Vec<&str> = match level {
        RiskLevel::High => vec![
            "Regular BP monitoring",
            "Medication adherence review",
            "Lifestyle modifications (DASH diet, exercise)",
            "Follow-up with clinician",
        ],
        RiskLevel::Critical => vec![
            "Regular BP monitoring",
            "Medication adherence review",
            "Lifestyle modifications (DASH diet, exercise)",
            "Consider immediate medical evaluation",
        ],
        _ => Vec::new(),
    };

    RiskCandidate::new("bp_category", "Blood Pressure Status", level, category.score())
        .with_value("systolic", sbp)
        .with_value("diastolic", dbp)
        .with_value("category", category.label())
        .with_why(why)
        .with_warnings(warnings)
        .with_actions(actions)
}
