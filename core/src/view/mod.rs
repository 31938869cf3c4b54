//! Derived views of the task collection
//!
//! [`visible_tasks`] picks and orders the tasks to show; [`render_model`]
//! turns them into display records.

mod query;
mod render;

pub use query::{compare_tasks, visible_tasks, FilterMode, Query};
pub use render::{render_model, Badge, Counts, RenderModel, TaskRow};
