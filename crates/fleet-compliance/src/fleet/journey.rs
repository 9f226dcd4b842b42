use serde::{Deserialize, Serialize};

/// Linear progression of a vehicle through a pre-shipment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStage {
    Assigned,
    Loading,
    InTransit,
    Unloading,
    Delivered,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JourneyError {
    #[error("unknown journey stage '{0}'")]
    UnknownStage(String),
    #[error("cannot move from {from:?} to {to:?}; journeys only advance one stage at a time")]
    InvalidTransition {
        from: JourneyStage,
        to: JourneyStage,
    },
}

impl JourneyStage {
    pub const TOTAL_STEPS: u8 = 5;

    pub const fn ordered() -> [Self; 5] {
        [
            Self::Assigned,
            Self::Loading,
            Self::InTransit,
            Self::Unloading,
            Self::Delivered,
        ]
    }

    /// Canonical path segment, accepted back by [`JourneyStage::parse`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Loading => "loading",
            Self::InTransit => "in_transit",
            Self::Unloading => "unloading",
            Self::Delivered => "delivered",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Assigned => "Vehicle Assigned",
            Self::Loading => "Loading",
            Self::InTransit => "In Transit",
            Self::Unloading => "Unloading",
            Self::Delivered => "Delivered",
        }
    }

    /// 1-based position in the progression.
    pub const fn step(self) -> u8 {
        match self {
            Self::Assigned => 1,
            Self::Loading => 2,
            Self::InTransit => 3,
            Self::Unloading => 4,
            Self::Delivered => 5,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Assigned => Some(Self::Loading),
            Self::Loading => Some(Self::InTransit),
            Self::InTransit => Some(Self::Unloading),
            Self::Unloading => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }

    pub const fn progress_percent(self) -> u8 {
        self.step() * 100 / Self::TOTAL_STEPS
    }

    pub fn parse(raw: &str) -> Result<Self, JourneyError> {
        let normalized = raw
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' '], "_");

        match normalized.as_str() {
            "assigned" | "vehicle_assigned" | "scheduled" => Ok(Self::Assigned),
            "loading" | "at_loading_point" => Ok(Self::Loading),
            "in_transit" | "intransit" | "dispatched" => Ok(Self::InTransit),
            "unloading" | "at_destination" => Ok(Self::Unloading),
            "delivered" | "completed" => Ok(Self::Delivered),
            _ => Err(JourneyError::UnknownStage(raw.trim().to_string())),
        }
    }

    /// Move to `target`, which must be the immediate successor.
    pub fn advance(self, target: Self) -> Result<Self, JourneyError> {
        if self.next() == Some(target) {
            Ok(target)
        } else {
            Err(JourneyError::InvalidTransition {
                from: self,
                to: target,
            })
        }
    }
}

/// Display view of where a vehicle sits in its journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyProgress {
    pub stage: JourneyStage,
    pub stage_label: &'static str,
    pub step: u8,
    pub total_steps: u8,
    pub percent: u8,
    pub next_stage_label: Option<&'static str>,
    pub completed_stages: Vec<&'static str>,
    pub is_complete: bool,
}

impl JourneyProgress {
    pub fn for_stage(stage: JourneyStage) -> Self {
        let completed_stages = JourneyStage::ordered()
            .into_iter()
            .filter(|candidate| candidate.step() < stage.step())
            .map(JourneyStage::label)
            .collect();

        Self {
            stage,
            stage_label: stage.label(),
            step: stage.step(),
            total_steps: JourneyStage::TOTAL_STEPS,
            percent: stage.progress_percent(),
            next_stage_label: stage.next().map(JourneyStage::label),
            completed_stages,
            is_complete: stage.is_terminal(),
        }
    }
}
