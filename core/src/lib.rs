//! Core library for the todo list
//!
//! This crate contains the task state and view logic:
//! - Task store and its persistence
//! - Date and priority classification
//! - Filtering, ordering and rendering of the visible list

pub mod app;
pub mod error;
pub mod locale;
pub mod schedule;
pub mod storage;
pub mod task;
pub mod view;

pub use app::{Confirmation, Notice, NoticeKind, Outcome, Prefill, TodoApp};
pub use error::{Error, ValidationError};
pub use locale::{Labels, Locale};
pub type Result<T> = std::result::Result<T, Error>;
