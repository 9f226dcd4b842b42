//! Document expiry classification, compliance scoring and journey tracking
//! for fleet vehicles.
//!
//! The scoring core never reads the clock. Callers pass the reference date;
//! [`resolve_today`] is the single place the HTTP and CLI layers fall back to
//! the local calendar date.

pub mod compliance;
pub mod documents;
pub mod domain;
pub mod journey;
pub mod report;
pub mod roster;
pub mod router;

#[cfg(test)]
mod tests;

pub use compliance::{
    score, BreakdownEntry, CheckStatus, ComplianceResult, ComplianceScorer, Grade, RubricCategory,
};
pub use documents::{
    classify, classify_raw, classify_value, document_statuses, expiry_message, sort_by_urgency,
    summarize, DocumentStatus, DocumentSummary, DocumentTier,
};
pub use domain::{DocumentKind, DriverAssignment, ExpiryValue, VehicleRecord};
pub use journey::{JourneyError, JourneyProgress, JourneyStage};
pub use report::{FleetComplianceReport, GradeCount, UrgentDocument, VehicleScorecard};
pub use roster::{FleetRosterImporter, RosterImportError};
pub use router::compliance_router;

use chrono::{Local, NaiveDate};

/// Strict `YYYY-MM-DD` parser for caller-supplied reference dates.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
