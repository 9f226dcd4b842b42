//! Expiry classification for vehicle documents.
//!
//! Classification is a pure mapping from `(expiry date, reference date)` to a
//! [`DocumentTier`]. The reference date is always supplied by the caller.

mod dates;
mod summary;

pub use dates::{format_display, parse_expiry, resolve_expiry};
pub use summary::{sort_by_urgency, summarize, urgency_cmp, DocumentSummary};

use super::domain::{DocumentKind, ExpiryValue, VehicleRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Documents expiring within this many days are critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 7;
/// Documents expiring within this many days (and outside the critical window) are a warning.
pub const WARNING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentTier {
    Expired,
    Critical,
    Warning,
    Valid,
    Missing,
}

impl DocumentTier {
    pub fn from_days_remaining(days_remaining: Option<i64>) -> Self {
        match days_remaining {
            None => Self::Missing,
            Some(days) if days < 0 => Self::Expired,
            Some(days) if days <= CRITICAL_WINDOW_DAYS => Self::Critical,
            Some(days) if days <= WARNING_WINDOW_DAYS => Self::Warning,
            Some(_) => Self::Valid,
        }
    }

    /// Sort rank, lower is more urgent.
    pub const fn urgency_rank(self) -> u8 {
        match self {
            Self::Expired => 1,
            Self::Critical => 2,
            Self::Warning => 3,
            Self::Missing => 4,
            Self::Valid => 5,
        }
    }

    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Expired | Self::Critical | Self::Warning)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::Critical => "Critical",
            Self::Warning => "Expiring Soon",
            Self::Valid => "Valid",
            Self::Missing => "Missing",
        }
    }
}

/// Classified state of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStatus {
    pub kind: DocumentKind,
    pub label: &'static str,
    pub tier: DocumentTier,
    pub tier_label: &'static str,
    pub days_remaining: Option<i64>,
    pub message: String,
    pub expiry_date: Option<NaiveDate>,
    pub formatted_date: Option<String>,
}

/// Classify a parsed expiry date against `today`.
pub fn classify(kind: DocumentKind, expiry: Option<NaiveDate>, today: NaiveDate) -> DocumentStatus {
    let days_remaining = expiry.map(|date| (date - today).num_days());
    let tier = DocumentTier::from_days_remaining(days_remaining);

    DocumentStatus {
        kind,
        label: kind.label(),
        tier,
        tier_label: tier.label(),
        days_remaining,
        message: expiry_message(days_remaining),
        expiry_date: expiry,
        formatted_date: expiry.map(format_display),
    }
}

/// Classify raw expiry text; unparseable input is treated as absent.
pub fn classify_raw(kind: DocumentKind, raw: Option<&str>, today: NaiveDate) -> DocumentStatus {
    classify(kind, raw.and_then(parse_expiry), today)
}

/// Classify a supplied expiry value; unparseable input is treated as absent.
pub fn classify_value(
    kind: DocumentKind,
    value: Option<&ExpiryValue>,
    today: NaiveDate,
) -> DocumentStatus {
    classify(kind, value.and_then(resolve_expiry), today)
}

/// Statuses for all five documents of a vehicle, in rubric order.
pub fn document_statuses(vehicle: &VehicleRecord, today: NaiveDate) -> Vec<DocumentStatus> {
    DocumentKind::ordered()
        .into_iter()
        .map(|kind| classify_value(kind, vehicle.expiry_of(kind), today))
        .collect()
}

pub fn expiry_message(days_remaining: Option<i64>) -> String {
    match days_remaining {
        None => "No expiry date".to_string(),
        Some(-1) => "Expired 1 day ago".to_string(),
        Some(days) if days < 0 => format!("Expired {} days ago", days.unsigned_abs()),
        Some(0) => "Expires today".to_string(),
        Some(1) => "Expires tomorrow".to_string(),
        Some(days) if days <= WARNING_WINDOW_DAYS => format!("Expires in {days} days"),
        Some(days) => format!("Valid for {days} days"),
    }
}
