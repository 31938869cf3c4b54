//! Typed commands emitted by a presentation layer

use serde::{Deserialize, Serialize};

use crate::view::FilterMode;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Submit the creation form with raw field values
    Add { text: String, date: String },
    Toggle { id: String },
    Delete { id: String },
    /// Remove a task and hand its fields back for re-entry
    Edit { id: String },
    ClearAll,
    SetFilter { mode: FilterMode },
    SetSearch { term: String },
}

impl Command {
    /// Commands a presentation layer should confirm before sending
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete { .. } | Self::ClearAll)
    }
}
