//! Task model definitions
//!
//! The serialized form is shared with data written by earlier versions:
//! `{id, text, date, done, createdAt}`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::schedule::parse_due;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: String,
    text: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    done: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with a fresh id
    pub(crate) fn new(
        text: impl Into<String>,
        date: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            date,
            done: false,
            created_at,
        }
    }

    /// Check raw form input, returning the trimmed text and date.
    ///
    /// Text is checked before the date.
    pub fn validate_input(text: &str, date: &str) -> Result<(String, String), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let date = date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        Ok((text.to_string(), date.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw due date as stored; empty strings count as absent
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Parsed due date, `None` when absent or malformed
    pub fn due(&self) -> Option<NaiveDate> {
        self.date().and_then(parse_due)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn toggle(&mut self) {
        self.done = !self.done;
    }

    #[cfg(test)]
    pub(crate) fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}
