//! Task module
//!
//! This module contains the task entity, the store that owns the
//! collection, and the commands a presentation layer sends to it.

mod command;
mod model;
mod store;

pub use command::Command;
pub use model::Task;
pub use store::TaskStore;
