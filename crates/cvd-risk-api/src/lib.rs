//! JSON boundary for the CVD risk engine.
//!
//! Takes a request body as a string, runs the prediction pipeline, and
//! returns a status plus a `{success, data}` or `{success, error}` envelope.
//! Transport (HTTP, IPC, ...) is left to the caller.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use cvd_risk_core::{AssessmentConfig, RiskAssessmentService};
use tracing::error;

/// Handler for prediction requests.
#[derive(Debug, Clone, Default)]
pub struct PredictionHandler {
    service: RiskAssessmentService,
}

impl PredictionHandler {
    /// Create a new handler.
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            service: RiskAssessmentService::new(config),
        }
    }

    /// Handle one request body.
    pub fn handle(&self, body: &str) -> ApiResponse {
        match self.predict(body) {
            Ok(data) => ApiResponse::success(data),
            Err(e) => {
                error!(code = e.code(), status = e.status(), "prediction request failed: {}", e);
                ApiResponse::failure(&e)
            }
        }
    }

    fn predict(&self, body: &str) -> ApiResult<cvd_risk_core::PredictionResponse> {
        let raw = parse_request(body)?;
        Ok(self.service.predict(&raw)?)
    }
}

/// Handle a request with the default configuration.
pub fn handle_prediction(body: &str) -> ApiResponse {
    PredictionHandler::default().handle(body)
}
