use super::super::documents::{classify_value, DocumentTier};
use super::super::domain::{DocumentKind, VehicleRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    Documents,
    Operational,
}

impl RubricCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Operational => "Operational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RubricCheck {
    Document(DocumentKind),
    DriverAssigned,
    GpsTracking,
    VehicleDataComplete,
}

/// One weighted line of the compliance rubric.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RubricItem {
    pub name: &'static str,
    pub category: RubricCategory,
    pub points: u8,
    pub check: RubricCheck,
    /// When set, an absent input produces no breakdown entry instead of a failed check.
    pub exempt_when_absent: bool,
}

pub(crate) const STANDARD_RUBRIC: [RubricItem; 8] = [
    RubricItem {
        name: "Insurance",
        category: RubricCategory::Documents,
        points: 25,
        check: RubricCheck::Document(DocumentKind::Insurance),
        exempt_when_absent: false,
    },
    RubricItem {
        name: "Registration Certificate",
        category: RubricCategory::Documents,
        points: 20,
        check: RubricCheck::Document(DocumentKind::RegistrationCertificate),
        exempt_when_absent: false,
    },
    RubricItem {
        name: "Permit",
        category: RubricCategory::Documents,
        points: 10,
        check: RubricCheck::Document(DocumentKind::Permit),
        exempt_when_absent: false,
    },
    RubricItem {
        name: "Pollution Certificate",
        category: RubricCategory::Documents,
        points: 10,
        check: RubricCheck::Document(DocumentKind::PollutionCertificate),
        exempt_when_absent: false,
    },
    RubricItem {
        name: "Fitness Certificate",
        category: RubricCategory::Documents,
        points: 5,
        check: RubricCheck::Document(DocumentKind::FitnessCertificate),
        exempt_when_absent: true,
    },
    RubricItem {
        name: "Driver Assigned",
        category: RubricCategory::Operational,
        points: 15,
        check: RubricCheck::DriverAssigned,
        exempt_when_absent: false,
    },
    RubricItem {
        name: "GPS Tracking",
        category: RubricCategory::Operational,
        points: 10,
        check: RubricCheck::GpsTracking,
        exempt_when_absent: false,
    },
    RubricItem {
        name: "Vehicle Data Completeness",
        category: RubricCategory::Operational,
        points: 5,
        check: RubricCheck::VehicleDataComplete,
        exempt_when_absent: false,
    },
];

pub(crate) enum CheckOutcome {
    Passed,
    Failed { issue: String },
    Absent { issue: String },
}

impl RubricItem {
    pub(crate) fn evaluate(&self, vehicle: &VehicleRecord, today: NaiveDate) -> CheckOutcome {
        match self.check {
            RubricCheck::Document(kind) => {
                let raw = vehicle.expiry_of(kind);
                let status = classify_value(kind, raw, today);
                if status.tier == DocumentTier::Valid {
                    return CheckOutcome::Passed;
                }

                let issue = match status.tier {
                    DocumentTier::Missing if raw.is_some() => {
                        format!("{} has an unreadable expiry date", self.name)
                    }
                    DocumentTier::Missing => format!("{} details missing", self.name),
                    _ => format!("{}: {}", self.name, status.message),
                };

                if raw.is_none() {
                    CheckOutcome::Absent { issue }
                } else {
                    CheckOutcome::Failed { issue }
                }
            }
            RubricCheck::DriverAssigned => match vehicle.assigned_driver() {
                Some(_) => CheckOutcome::Passed,
                None => CheckOutcome::Failed {
                    issue: "No driver assigned".to_string(),
                },
            },
            RubricCheck::GpsTracking => {
                if vehicle.gps_tracking_enabled() {
                    CheckOutcome::Passed
                } else {
                    CheckOutcome::Failed {
                        issue: "GPS tracking not enabled".to_string(),
                    }
                }
            }
            RubricCheck::VehicleDataComplete => {
                if vehicle.has_identifiers() {
                    CheckOutcome::Passed
                } else {
                    CheckOutcome::Failed {
                        issue: "Chassis or engine number missing".to_string(),
                    }
                }
            }
        }
    }
}

pub(crate) fn max_points(rubric: &[RubricItem]) -> u16 {
    rubric.iter().map(|item| u16::from(item.points)).sum()
}
