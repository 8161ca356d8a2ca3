//! End-to-end tests for the prediction endpoint.

use anyhow::Result;
use cvd_risk_api::{handle_prediction, ApiEnvelope, PredictionHandler};
use cvd_risk_core::{AssessmentConfig, WhoRegion};
use proptest::prelude::*;
use serde_json::{json, Value};

fn smoker_body() -> Value {
    json!({
        "age": "55",
        "sexAtBirth": "male",
        "raceEthnicity": "white",
        "systolicBp": "150",
        "onBpMeds": "no",
        "hasLabResults": true,
        "cholesterolUnit": "mgdL",
        "totalCholesterol": "240",
        "hdlCholesterol": "45",
        "hasDiabetes": "no",
        "smokingStatus": "current"
    })
}

fn envelope(body: &Value) -> Result<(u16, Value)> {
    let response = handle_prediction(&body.to_string());
    let json: Value = serde_json::from_str(&response.to_json()?)?;
    Ok((response.status, json))
}

#[test]
fn test_successful_prediction() -> Result<()> {
    let (status, json) = envelope(&smoker_body())?;

    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["errors"], json!([]));
    assert_eq!(data["top3"].as_array().map(Vec::len), Some(3));

    let ids: Vec<&str> = data["allRisks"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert!(ids.contains(&"ascvd_10yr"));
    assert!(ids.contains(&"bp_category"));
    Ok(())
}

#[test]
fn test_validation_failure_is_success_envelope() -> Result<()> {
    let mut body = smoker_body();
    body["age"] = json!("");

    let (status, json) = envelope(&body)?;
    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["errors"], json!(["Age is required"]));
    assert_eq!(json["data"]["top3"], json!([]));
    assert_eq!(json["data"]["allRisks"], json!([]));
    assert_eq!(json["data"]["warnings"], json!([]));
    Ok(())
}

#[test]
fn test_missing_body() -> Result<()> {
    let response = handle_prediction("null");
    assert_eq!(response.status, 400);

    let error = response.body.error.clone().unwrap_or_else(|| panic!("expected error body"));
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert_eq!(error.message, "Request body is required");
    Ok(())
}

#[test]
fn test_normalization_defect_reported_with_field() -> Result<()> {
    let mut body = smoker_body();
    body["smokingStatus"] = json!("occasionally");

    let (status, json) = envelope(&body)?;
    assert_eq!(status, 400);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "DATA_NORMALIZATION_ERROR");
    assert_eq!(json["error"]["field"], "smokingStatus");
    Ok(())
}

#[test]
fn test_configured_region() -> Result<()> {
    let handler = PredictionHandler::new(
        AssessmentConfig::default().with_who_region(WhoRegion::SouthAsia),
    );
    let response = handler.handle(&smoker_body().to_string());
    let data = response.body.data.clone().unwrap_or_default();

    let who = data
        .all_risks
        .iter()
        .find(|c| c.id == "who_cvd_10yr")
        .unwrap_or_else(|| panic!("WHO candidate missing"));
    assert_eq!(who.value["region"], "south_asia");
    Ok(())
}

#[test]
fn test_envelope_parses_back() -> Result<()> {
    let response = handle_prediction(&smoker_body().to_string());
    let parsed: ApiEnvelope = serde_json::from_str(&response.to_json()?)?;
    assert!(parsed.success);
    assert!(parsed.error.is_none());

    let ids = |envelope: &ApiEnvelope| -> Vec<String> {
        envelope
            .data
            .iter()
            .flat_map(|d| d.all_risks.iter().map(|c| c.id.clone()))
            .collect()
    };
    assert_eq!(ids(&parsed), ids(&response.body));
    Ok(())
}

proptest! {
    #[test]
    fn prop_arbitrary_bodies_never_panic(body in ".{0,64}") {
        let response = handle_prediction(&body);
        prop_assert!(response.status == 200 || response.status == 400);
        prop_assert_eq!(response.body.success, response.status == 200);
    }
}
