use std::io::Cursor;

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::compliance::{score, ComplianceResult};
use super::documents::{document_statuses, sort_by_urgency, summarize, DocumentStatus, DocumentSummary};
use super::domain::VehicleRecord;
use super::journey::{JourneyProgress, JourneyStage};
use super::report::FleetComplianceReport;
use super::roster::FleetRosterImporter;
use super::{parse_reference_date, resolve_today};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct VehicleComplianceRequest {
    pub vehicle: VehicleRecord,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct VehicleScoreResponse {
    pub registration_number: String,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub result: ComplianceResult,
}

#[derive(Debug, Serialize)]
pub struct DocumentStatusResponse {
    pub registration_number: String,
    pub today: NaiveDate,
    pub summary: DocumentSummary,
    pub documents: Vec<DocumentStatus>,
}

#[derive(Debug, Deserialize)]
pub struct FleetComplianceRequest {
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub roster_csv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the scoring, document and journey endpoints.
pub fn compliance_router() -> Router {
    Router::new()
        .route("/api/v1/compliance/score", post(score_handler))
        .route("/api/v1/compliance/documents", post(documents_handler))
        .route("/api/v1/compliance/fleet", post(fleet_handler))
        .route("/api/v1/journey/:stage", get(journey_handler))
}

pub(crate) async fn score_handler(
    Json(request): Json<VehicleComplianceRequest>,
) -> Json<VehicleScoreResponse> {
    let today = resolve_today(request.today);
    Json(VehicleScoreResponse {
        registration_number: request.vehicle.display_name().to_string(),
        today,
        result: score(&request.vehicle, today),
    })
}

pub(crate) async fn documents_handler(
    Json(request): Json<VehicleComplianceRequest>,
) -> Json<DocumentStatusResponse> {
    let today = resolve_today(request.today);
    let mut documents = document_statuses(&request.vehicle, today);
    sort_by_urgency(&mut documents);

    Json(DocumentStatusResponse {
        registration_number: request.vehicle.display_name().to_string(),
        today,
        summary: summarize(&documents),
        documents,
    })
}

pub(crate) async fn fleet_handler(
    Json(request): Json<FleetComplianceRequest>,
) -> Result<Json<FleetComplianceReport>, AppError> {
    let FleetComplianceRequest {
        mut vehicles,
        roster_csv,
        today,
    } = request;

    if let Some(csv) = roster_csv {
        let imported = FleetRosterImporter::from_reader(Cursor::new(csv.into_bytes()))?;
        vehicles.extend(imported);
    }

    let today = resolve_today(today);
    Ok(Json(FleetComplianceReport::build(&vehicles, today)))
}

pub(crate) async fn journey_handler(
    Path(stage): Path<String>,
) -> Result<Json<JourneyProgress>, AppError> {
    let stage = JourneyStage::parse(&stage)?;
    Ok(Json(JourneyProgress::for_stage(stage)))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_reference_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
