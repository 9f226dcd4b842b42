use super::{DocumentStatus, DocumentTier};
use serde::Serialize;
use std::cmp::Ordering;

/// Per-tier counts across a set of document statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub total: usize,
    pub expired: usize,
    pub critical: usize,
    pub warning: usize,
    pub valid: usize,
    pub missing: usize,
    pub needs_attention: usize,
}

impl DocumentSummary {
    pub fn record(&mut self, tier: DocumentTier) {
        self.total += 1;
        match tier {
            DocumentTier::Expired => self.expired += 1,
            DocumentTier::Critical => self.critical += 1,
            DocumentTier::Warning => self.warning += 1,
            DocumentTier::Valid => self.valid += 1,
            DocumentTier::Missing => self.missing += 1,
        }
        self.needs_attention = self.expired + self.critical + self.warning;
    }

    pub fn merge(&mut self, other: &DocumentSummary) {
        self.total += other.total;
        self.expired += other.expired;
        self.critical += other.critical;
        self.warning += other.warning;
        self.valid += other.valid;
        self.missing += other.missing;
        self.needs_attention = self.expired + self.critical + self.warning;
    }
}

pub fn summarize(statuses: &[DocumentStatus]) -> DocumentSummary {
    let mut summary = DocumentSummary::default();
    for status in statuses {
        summary.record(status.tier);
    }
    summary
}

/// Tier rank first, then fewest days remaining; unknown days sort last within a tier.
pub fn urgency_cmp(a: &DocumentStatus, b: &DocumentStatus) -> Ordering {
    a.tier
        .urgency_rank()
        .cmp(&b.tier.urgency_rank())
        .then_with(|| match (a.days_remaining, b.days_remaining) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Stable in-place sort, most urgent first.
pub fn sort_by_urgency(statuses: &mut [DocumentStatus]) {
    statuses.sort_by(urgency_cmp);
}
