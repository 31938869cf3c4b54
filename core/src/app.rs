//! Application controller
//!
//! Consumes [`Command`]s from a presentation layer, applies them to the
//! [`TaskStore`] and hands back a freshly rendered view after each one.

use std::rc::Rc;

use serde::Serialize;
use tracing::warn;

use crate::locale::{Labels, Locale};
use crate::schedule::Clock;
use crate::task::{Command, Task, TaskStore};
use crate::view::{render_model, visible_tasks, Query, RenderModel};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
}

/// Transient message shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn info(message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.to_string(),
        }
    }
}

/// Field values to put back into the creation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prefill {
    pub text: String,
    pub date: Option<String>,
}

/// Question to ask before a destructive command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
}

/// Result of one dispatched command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub prefill: Option<Prefill>,
    pub view: RenderModel,
}

/// Owns the store and the current query for the lifetime of the app
pub struct TodoApp {
    store: TaskStore,
    clock: Rc<dyn Clock>,
    labels: &'static Labels,
    query: Query,
}

impl TodoApp {
    pub fn new(store: TaskStore, clock: Rc<dyn Clock>, locale: Locale) -> Self {
        Self {
            store,
            clock,
            labels: locale.labels(),
            query: Query::default(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Earliest due date the creation form should offer, as `YYYY-MM-DD`
    pub fn min_due_date(&self) -> String {
        self.clock.local().date().format("%Y-%m-%d").to_string()
    }

    /// Tasks currently visible, in display order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.store.tasks(), &self.query, self.clock.local())
    }

    /// Recompute the view without changing anything
    pub fn render(&self) -> RenderModel {
        render_model(
            &self.visible(),
            self.store.tasks(),
            self.clock.local(),
            self.labels,
        )
    }

    /// Confirmation to show before sending `command`, if it needs one.
    ///
    /// `None` for non-destructive commands, stale ids and clearing an
    /// empty list.
    pub fn confirmation(&self, command: &Command) -> Option<Confirmation> {
        match command {
            Command::Delete { id } => self.store.get(id).map(|task| Confirmation {
                title: self.labels.confirm_delete_title.to_string(),
                message: self.labels.confirm_delete_message(task.text()),
            }),
            Command::ClearAll if !self.store.is_empty() => Some(Confirmation {
                title: self.labels.confirm_clear_title.to_string(),
                message: self.labels.confirm_clear_message(self.store.len()),
            }),
            _ => None,
        }
    }

    /// Apply one command and re-render.
    ///
    /// Validation failures are returned as errors with nothing changed.
    /// Commands naming an id that no longer exists do nothing.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let mut notice = None;
        let mut prefill = None;

        match command {
            Command::Add { text, date } => {
                self.store.add(&text, &date)?;
                notice = Some(Notice::success(self.labels.task_added));
            }
            Command::Toggle { id } => {
                if let Some(task) = absorb_stale(self.store.toggle_done(&id))? {
                    let message = if task.is_done() {
                        self.labels.task_completed
                    } else {
                        self.labels.task_reopened
                    };
                    notice = Some(Notice::success(message));
                }
            }
            Command::Delete { id } => {
                if absorb_stale(self.store.remove(&id))?.is_some() {
                    notice = Some(Notice::success(self.labels.task_deleted));
                }
            }
            Command::Edit { id } => {
                if let Some(task) = self.store.take_for_edit(&id)? {
                    prefill = Some(Prefill {
                        text: task.text().to_string(),
                        date: task.date().map(str::to_string),
                    });
                    notice = Some(Notice::info(self.labels.edit_started));
                } else {
                    warn!("Ignoring edit of unknown task {}", id);
                }
            }
            Command::ClearAll => {
                if self.store.is_empty() {
                    notice = Some(Notice::info(self.labels.nothing_to_clear));
                } else {
                    self.store.clear()?;
                    notice = Some(Notice::success(self.labels.all_cleared));
                }
            }
            Command::SetFilter { mode } => self.query.filter = mode,
            Command::SetSearch { term } => self.query.search = term,
        }

        Ok(Outcome {
            notice,
            prefill,
            view: self.render(),
        })
    }
}

/// Turn a stale-id error into `None`
fn absorb_stale<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::TaskNotFound(id)) => {
            warn!("Ignoring command for unknown task {}", id);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
