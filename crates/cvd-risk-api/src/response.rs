//! Response envelopes.

use cvd_risk_core::PredictionResponse;
use serde::{Deserialize, Serialize};

use crate::request::ApiError;

/// Error details in a failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// `{success: true, data}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PredictionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Status plus envelope, ready for a transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ApiEnvelope,
}

impl ApiResponse {
    pub fn success(data: PredictionResponse) -> Self {
        Self {
            status: 200,
            body: ApiEnvelope {
                success: true,
                data: Some(data),
                error: None,
            },
        }
    }

    pub fn failure(error: &ApiError) -> Self {
        Self {
            status: error.status(),
            body: ApiEnvelope {
                success: false,
                data: None,
                error: Some(ErrorBody {
                    code: error.code().to_string(),
                    message: error.message(),
                    field: error.field().map(str::to_string),
                }),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.success
    }

    /// Serialize the envelope.
    pub fn to_json(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(&self.body)?)
    }
}
