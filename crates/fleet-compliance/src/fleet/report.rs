use super::compliance::{ComplianceResult, ComplianceScorer, Grade};
use super::documents::{document_statuses, summarize, urgency_cmp, DocumentStatus, DocumentSummary};
use super::domain::VehicleRecord;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct VehicleScorecard {
    pub registration_number: String,
    pub documents: DocumentSummary,
    pub result: ComplianceResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub grade_label: &'static str,
    pub vehicles: usize,
}

/// A document needing attention, tagged with the vehicle it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct UrgentDocument {
    pub registration_number: String,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetComplianceReport {
    pub today: NaiveDate,
    pub vehicle_count: usize,
    pub average_percentage: u8,
    pub grade_distribution: Vec<GradeCount>,
    pub documents: DocumentSummary,
    pub urgent_documents: Vec<UrgentDocument>,
    pub scorecards: Vec<VehicleScorecard>,
}

impl FleetComplianceReport {
    pub fn build(vehicles: &[VehicleRecord], today: NaiveDate) -> Self {
        let scorer = ComplianceScorer::standard();
        let mut documents = DocumentSummary::default();
        let mut urgent_documents = Vec::new();
        let mut scorecards = Vec::with_capacity(vehicles.len());

        for vehicle in vehicles {
            let registration_number = vehicle.display_name().to_string();
            let statuses = document_statuses(vehicle, today);
            let vehicle_documents = summarize(&statuses);
            documents.merge(&vehicle_documents);

            urgent_documents.extend(
                statuses
                    .into_iter()
                    .filter(|status| status.tier.needs_attention())
                    .map(|status| UrgentDocument {
                        registration_number: registration_number.clone(),
                        status,
                    }),
            );

            scorecards.push(VehicleScorecard {
                registration_number,
                documents: vehicle_documents,
                result: scorer.score(vehicle, today),
            });
        }

        urgent_documents.sort_by(|a, b| urgency_cmp(&a.status, &b.status));

        let grade_distribution = Grade::ordered()
            .into_iter()
            .map(|grade| GradeCount {
                grade,
                grade_label: grade.label(),
                vehicles: scorecards
                    .iter()
                    .filter(|card| card.result.grade == grade)
                    .count(),
            })
            .collect();

        let average_percentage = average_percentage(&scorecards);

        debug!(
            vehicles = scorecards.len(),
            average_percentage,
            urgent = urgent_documents.len(),
            "built fleet compliance report"
        );

        Self {
            today,
            vehicle_count: scorecards.len(),
            average_percentage,
            grade_distribution,
            documents,
            urgent_documents,
            scorecards,
        }
    }

    pub fn scorecard(&self, registration_number: &str) -> Option<&VehicleScorecard> {
        self.scorecards
            .iter()
            .find(|card| card.registration_number.eq_ignore_ascii_case(registration_number))
    }
}

fn average_percentage(scorecards: &[VehicleScorecard]) -> u8 {
    if scorecards.is_empty() {
        return 0;
    }

    let total: u32 = scorecards
        .iter()
        .map(|card| u32::from(card.result.percentage))
        .sum();
    (f64::from(total) / scorecards.len() as f64).round() as u8
}
