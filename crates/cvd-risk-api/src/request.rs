//! Request parsing and API errors.

use cvd_risk_core::{AssessmentError, RawInput};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to API callers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("{0}")]
    Engine(#[from] AssessmentError),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) | ApiError::JsonParse(_) => "VALIDATION_ERROR",
            ApiError::Engine(AssessmentError::Normalization(_)) => "DATA_NORMALIZATION_ERROR",
            ApiError::Engine(AssessmentError::RiskCalculation(_)) => "RISK_CALCULATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP-style status.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_)
            | ApiError::JsonParse(_)
            | ApiError::Engine(AssessmentError::Normalization(_)) => 400,
            ApiError::Engine(AssessmentError::RiskCalculation(_)) | ApiError::Internal(_) => 500,
        }
    }

    /// Offending form field, when known.
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::Engine(AssessmentError::Normalization(e)) => Some(&e.field),
            _ => None,
        }
    }

    /// Message shown to the caller. Normalization failures show the bare
    /// field message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Engine(AssessmentError::Normalization(e)) => e.message.clone(),
            other => other.to_string(),
        }
    }
}

/// Parse a request body into form input.
///
/// The body must be a JSON object; absent fields take their defaults.
pub fn parse_request(body: &str) -> ApiResult<RawInput> {
    if body.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Request body is required".into()));
    }
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ApiError::InvalidRequest("Request body is required".into()));
    }
    Ok(serde_json::from_value(value)?)
}
