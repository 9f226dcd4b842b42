mod grade;
mod rubric;

pub use grade::{summary_message, Grade};
pub use rubric::RubricCategory;

use super::domain::VehicleRecord;
use chrono::NaiveDate;
use rubric::{max_points, CheckOutcome, RubricItem, STANDARD_RUBRIC};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Valid,
    Invalid,
}

/// Evaluated result of one rubric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub item: &'static str,
    pub category: RubricCategory,
    pub status: CheckStatus,
    pub points: u8,
    pub max_points: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// Scorecard for one vehicle. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub score: u16,
    pub max_score: u16,
    pub percentage: u8,
    pub grade: Grade,
    pub grade_label: &'static str,
    pub grade_color: &'static str,
    pub breakdown: Vec<BreakdownEntry>,
    pub issues: Vec<BreakdownEntry>,
    pub has_issues: bool,
    pub summary: String,
}

/// Stateless scorer applying the weighted rubric to a vehicle snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceScorer {
    rubric: &'static [RubricItem],
}

impl Default for ComplianceScorer {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComplianceScorer {
    pub const fn standard() -> Self {
        Self {
            rubric: &STANDARD_RUBRIC,
        }
    }

    pub fn max_score(&self) -> u16 {
        max_points(self.rubric)
    }

    pub fn score(&self, vehicle: &VehicleRecord, today: NaiveDate) -> ComplianceResult {
        let breakdown: Vec<BreakdownEntry> = self
            .rubric
            .iter()
            .filter_map(|item| evaluate_line(item, vehicle, today))
            .collect();

        let score: u16 = breakdown.iter().map(|entry| u16::from(entry.points)).sum();
        let max_score = self.max_score();
        let percentage = percentage_of(score, max_score);
        let grade = Grade::from_percentage(percentage);

        let issues: Vec<BreakdownEntry> = breakdown
            .iter()
            .filter(|entry| entry.status == CheckStatus::Invalid)
            .cloned()
            .collect();

        ComplianceResult {
            score,
            max_score,
            percentage,
            grade,
            grade_label: grade.label(),
            grade_color: grade.color(),
            summary: summary_message(percentage, issues.len()),
            has_issues: !issues.is_empty(),
            breakdown,
            issues,
        }
    }
}

/// Score a vehicle against the standard rubric.
pub fn score(vehicle: &VehicleRecord, today: NaiveDate) -> ComplianceResult {
    ComplianceScorer::standard().score(vehicle, today)
}

fn evaluate_line(
    item: &RubricItem,
    vehicle: &VehicleRecord,
    today: NaiveDate,
) -> Option<BreakdownEntry> {
    let (status, points, issue) = match item.evaluate(vehicle, today) {
        CheckOutcome::Passed => (CheckStatus::Valid, item.points, None),
        CheckOutcome::Absent { .. } if item.exempt_when_absent => return None,
        CheckOutcome::Absent { issue } | CheckOutcome::Failed { issue } => {
            (CheckStatus::Invalid, 0, Some(issue))
        }
    };

    Some(BreakdownEntry {
        item: item.name,
        category: item.category,
        status,
        points,
        max_points: item.points,
        issue,
    })
}

fn percentage_of(score: u16, max_score: u16) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let ratio = (f64::from(score) * 100.0 / f64::from(max_score)).round();
    ratio.clamp(0.0, 100.0) as u8
}
