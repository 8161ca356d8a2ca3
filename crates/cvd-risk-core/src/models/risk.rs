//! Risk candidates produced by the individual risk models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordinal risk level, lowest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Borderline,
    Intermediate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::Intermediate => "Intermediate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model's verdict on a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskCandidate {
    /// Stable model key (e.g. "ascvd_10yr")
    pub id: String,
    /// Human-readable title
    pub title: String,
    pub level: RiskLevel,
    /// Cross-model urgency (0.0 - 1.0), used for ranking
    pub score: f64,
    /// Model-specific detail (riskPercent, category, region, ...)
    #[serde(default)]
    pub value: Map<String, Value>,
    /// Contributing factors, most salient first
    pub why: Vec<String>,
    /// Caveats specific to this model's result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Recommended interventions, most impactful first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

impl RiskCandidate {
    /// Create a candidate with no detail, factors, warnings or actions.
    pub fn new(id: &str, title: &str, level: RiskLevel, score: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            level,
            score,
            value: Map::new(),
            why: Vec::new(),
            warnings: None,
            actions: None,
        }
    }

    /// Add a detail entry.
    pub fn with_value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.value.insert(key.to_string(), value.into());
        self
    }

    pub fn with_why(mut self, why: Vec<String>) -> Self {
        self.why = why;
        self
    }

    /// Attach warnings; an empty list leaves the field unset.
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = (!warnings.is_empty()).then_some(warnings);
        self
    }

    /// Attach actions; an empty list leaves the field unset.
    pub fn with_actions<S: Into<String>>(mut self, actions: impl IntoIterator<Item = S>) -> Self {
        let actions: Vec<String> = actions.into_iter().map(Into::into).collect();
        self.actions = (!actions.is_empty()).then_some(actions);
        self
    }

    /// The 10-year risk percentage, for models that report one.
    pub fn risk_percent(&self) -> Option<f64> {
        self.value.get("riskPercent").and_then(Value::as_f64)
    }

    /// Warnings attached to this candidate (empty when none).
    pub fn warning_messages(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or(&[])
    }
}
