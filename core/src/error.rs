//! Error types for the core library

use thiserror::Error;

/// Rejected user input on task creation.
///
/// Nothing is stored when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task text cannot be empty")]
    EmptyText,

    #[error("Due date is required")]
    MissingDate,
}

impl ValidationError {
    /// Name of the form field the error belongs next to
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyText => "text",
            Self::MissingDate => "date",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Stored tasks are corrupt: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for a stale id, which callers treat as a no-op
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }
}
