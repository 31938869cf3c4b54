//! Urgency tier derived from a due date

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::calendar::days_until;

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Overdue and due-today are high, the next two days medium, later low.
///
/// Completion state plays no part here.
pub fn classify(date: NaiveDate, now: NaiveDateTime) -> Priority {
    match days_until(date, now) {
        d if d <= 0 => Priority::High,
        1..=2 => Priority::Medium,
        _ => Priority::Low,
    }
}
