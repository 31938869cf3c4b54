//! View renderer
//!
//! Turns the visible task sequence into display records. Pure: the same
//! input always yields the same model.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::locale::Labels;
use crate::schedule::{classify, format_for_display, is_overdue, Priority};
use crate::task::Task;

/// Everything a presentation layer needs to draw the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub rows: Vec<TaskRow>,
    pub counts: Counts,
    /// No visible rows; show the empty-state placeholder
    pub is_empty: bool,
}

/// Totals over the whole collection, ignoring the current filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_done()).count();
        Self {
            total,
            pending: total - completed,
            completed,
        }
    }
}

/// One visible task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub date_label: String,
    /// False when the task has no due date and `date_label` is the placeholder
    pub scheduled: bool,
    /// Only present for pending tasks with a due date
    pub badge: Option<Badge>,
    pub done: bool,
}

/// Urgency marker for a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Tier used for styling, kept even when the label reads "overdue"
    pub tier: Priority,
    pub overdue: bool,
    pub label: String,
}

impl TaskRow {
    fn build(task: &Task, now: NaiveDateTime, labels: &Labels) -> Self {
        let (date_label, scheduled) = match task.date() {
            Some(raw) => (format_for_display(raw, now, labels), true),
            None => (labels.unscheduled.to_string(), false),
        };

        let badge = if scheduled && !task.is_done() {
            Some(Badge::for_task(task, now, labels))
        } else {
            None
        };

        Self {
            id: task.id().to_string(),
            title: task.text().to_string(),
            date_label,
            scheduled,
            badge,
            done: task.is_done(),
        }
    }
}

impl Badge {
    fn for_task(task: &Task, now: NaiveDateTime, labels: &Labels) -> Self {
        // Dates that do not parse have no distance to now and rank lowest
        let (tier, overdue) = match task.due() {
            Some(due) => (classify(due, now), is_overdue(due, now)),
            None => (Priority::Low, false),
        };
        let label = if overdue {
            labels.overdue
        } else {
            labels.priority(tier)
        };

        Self {
            tier,
            overdue,
            label: label.to_string(),
        }
    }
}

/// Build the render model for `visible`, with counts taken from `all`
pub fn render_model(
    visible: &[&Task],
    all: &[Task],
    now: NaiveDateTime,
    labels: &Labels,
) -> RenderModel {
    let rows: Vec<TaskRow> = visible
        .iter()
        .map(|task| TaskRow::build(task, now, labels))
        .collect();

    RenderModel {
        is_empty: rows.is_empty(),
        rows,
        counts: Counts::of(all),
    }
}
