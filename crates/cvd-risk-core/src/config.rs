//! Assessment configuration.

use serde::{Deserialize, Serialize};

use crate::calculators::WhoRegion;

/// Number of candidates surfaced as the headline risks.
pub const DEFAULT_TOP_N: usize = 3;

/// Settings shared by the evaluator and the assessment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentConfig {
    /// Region the WHO model is calibrated for
    pub who_region: WhoRegion,
    /// How many ranked candidates make up the headline list
    pub top_n: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            who_region: WhoRegion::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AssessmentConfig {
    pub fn with_who_region(mut self, region: WhoRegion) -> Self {
        self.who_region = region;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Parse a config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssessmentConfig::default();
        assert_eq!(config.who_region, WhoRegion::NorthAmericaHighIncome);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AssessmentConfig::from_json(r#"{"whoRegion": "western_europe"}"#).unwrap();
        assert_eq!(config.who_region, WhoRegion::WesternEurope);
        assert_eq!(config.top_n, DEFAULT_TOP_N);

        let config = AssessmentConfig::from_json("{}").unwrap();
        assert_eq!(config, AssessmentConfig::default());
    }

    #[test]
    fn test_unknown_region_rejected() {
        assert!(AssessmentConfig::from_json(r#"{"whoRegion": "atlantis"}"#).is_err());
    }

    #[test]
    fn test_builders() {
        let config = AssessmentConfig::default()
            .with_who_region(WhoRegion::SouthAsia)
            .with_top_n(5);
        assert_eq!(config.who_region, WhoRegion::SouthAsia);
        assert_eq!(config.top_n, 5);
    }
}
