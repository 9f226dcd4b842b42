use serde::{Deserialize, Serialize};

/// Letter grade derived from the compliance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const fn ordered() -> [Self; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90..=u8::MAX => Self::A,
            75..=89 => Self::B,
            60..=74 => Self::C,
            _ => Self::D,
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
        }
    }

    /// Presentation token only.
    pub const fn color(self) -> &'static str {
        match self {
            Self::A => "success",
            Self::B => "info",
            Self::C => "warning",
            Self::D => "danger",
        }
    }
}

pub fn summary_message(percentage: u8, issue_count: usize) -> String {
    if percentage >= 100 {
        return "Perfect compliance! Every check passed.".to_string();
    }

    if issue_count == 0 {
        return format!(
            "{} compliance with no outstanding issues",
            Grade::from_percentage(percentage).label()
        );
    }

    match percentage {
        90..=u8::MAX => format!(
            "Excellent compliance with {} minor {}",
            issue_count,
            issues_word(issue_count)
        ),
        75..=89 => format!(
            "Good compliance, {} {} to address",
            issue_count,
            issues_word(issue_count)
        ),
        60..=74 => format!(
            "Fair compliance, {} {} {} attention",
            issue_count,
            issues_word(issue_count),
            if issue_count == 1 { "needs" } else { "need" }
        ),
        _ => format!(
            "Poor compliance, {} critical {}",
            issue_count,
            issues_word(issue_count)
        ),
    }
}

fn issues_word(count: usize) -> &'static str {
    if count == 1 {
        "issue"
    } else {
        "issues"
    }
}
