//! Clinical red flags raised independently of risk scoring.

use serde::{Deserialize, Serialize};

/// How urgently a warning should be surfaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Info,
    Warning,
    Critical,
}

impl WarningSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningSeverity::Info => "info",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Critical => "critical",
        }
    }
}

/// Which part of the patient record triggered the warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    Age,
    BloodPressure,
    BodyComposition,
    Lipids,
}

impl WarningCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCategory::Age => "age",
            WarningCategory::BloodPressure => "blood_pressure",
            WarningCategory::BodyComposition => "body_composition",
            WarningCategory::Lipids => "lipids",
        }
    }
}

/// A clinical warning about the patient's data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalWarning {
    pub severity: WarningSeverity,
    pub message: String,
    pub category: WarningCategory,
}

impl ClinicalWarning {
    pub fn new(severity: WarningSeverity, category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            category,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == WarningSeverity::Critical
    }
}
