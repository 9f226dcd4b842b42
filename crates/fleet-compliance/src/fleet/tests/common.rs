use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::fleet::compliance::{BreakdownEntry, ComplianceResult};
use crate::fleet::documents::{classify, DocumentStatus};
use crate::fleet::domain::{DocumentKind, DriverAssignment, ExpiryValue, VehicleRecord};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> String {
    (today() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub(super) fn expiry_in(days: i64) -> Option<ExpiryValue> {
    Some(ExpiryValue::Text(days_from_today(days)))
}

pub(super) fn compliant_vehicle() -> VehicleRecord {
    VehicleRecord {
        registration_number: Some("KA-01-AB-1234".to_string()),
        rc_expiry: expiry_in(365),
        insurance_expiry: expiry_in(365),
        permit_expiry: expiry_in(365),
        puc_expiry: expiry_in(365),
        fitness_expiry: expiry_in(365),
        driver: Some(DriverAssignment::named("Asha Rao")),
        gps_enabled: Some(true),
        chassis_number: Some("MA3EHKD17A1234567".to_string()),
        engine_number: Some("K12MN1234567".to_string()),
    }
}

pub(super) fn empty_vehicle() -> VehicleRecord {
    VehicleRecord::default()
}

pub(super) fn status_for_days(kind: DocumentKind, days: Option<i64>) -> DocumentStatus {
    let expiry = days.map(|offset| today() + Duration::days(offset));
    classify(kind, expiry, today())
}

pub(super) fn entry<'a>(result: &'a ComplianceResult, item: &str) -> Option<&'a BreakdownEntry> {
    result.breakdown.iter().find(|entry| entry.item == item)
}

pub(super) fn issue_names(result: &ComplianceResult) -> Vec<&'static str> {
    result.issues.iter().map(|entry| entry.item).collect()
}

pub(super) fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
