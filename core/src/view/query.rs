//! Query engine: which tasks are visible, and in what order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::is_today;
use crate::task::Task;

/// Subset of tasks selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
    Today,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [Self::All, Self::Pending, Self::Completed, Self::Today];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Today => "today",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown filter `{s}`; expected all|pending|completed|today"))
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current filter mode and search term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub filter: FilterMode,
    pub search: String,
}

impl Query {
    pub fn new(filter: FilterMode, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// Whether `task` belongs in the visible set.
    ///
    /// A non-empty search term replaces the filter mode entirely: only the
    /// case-insensitive text match decides.
    pub fn matches(&self, task: &Task, now: NaiveDateTime) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            return task.text().to_lowercase().contains(&term);
        }

        match self.filter {
            FilterMode::All => true,
            FilterMode::Pending => !task.is_done(),
            FilterMode::Completed => task.is_done(),
            FilterMode::Today => task.due().is_some_and(|d| is_today(d, now)),
        }
    }
}

/// Display order: pending before done, then earliest due date, then newest.
///
/// Absent and unparseable dates sort after every real date.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let due = |t: &Task| t.due().unwrap_or(NaiveDate::MAX);

    a.is_done()
        .cmp(&b.is_done())
        .then_with(|| due(a).cmp(&due(b)))
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

/// Filter and order `tasks` for display. The input is left untouched.
pub fn visible_tasks<'a>(tasks: &'a [Task], query: &Query, now: NaiveDateTime) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| query.matches(t, now)).collect();
    visible.sort_by(|a, b| compare_tasks(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn base_time() -> DateTime<Utc> {
        "2024-01-01T00:00:00Z".parse().unwrap()
    }

    fn task(text: &str, date: Option<&str>, done: bool, created_offset: i64) -> Task {
        Task::new(
            text,
            date.map(str::to_string),
            base_time() + Duration::minutes(created_offset),
        )
        .with_done(done)
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text().to_string()).collect()
    }

    fn scenario() -> Vec<Task> {
        vec![
            task("A", Some("2024-01-05"), false, 0),
            task("B", Some("2024-01-03"), false, 1),
            task("C", Some("2024-01-01"), true, 2),
            task("D", None, false, 3),
        ]
    }

    #[test]
    fn test_sort_order() {
        let tasks = scenario();
        let visible = visible_tasks(&tasks, &Query::default(), now());
        assert_eq!(texts(&visible), ["B", "A", "D", "C"]);
    }

    #[test]
    fn test_newest_first_on_same_date() {
        let tasks = vec![
            task("older", Some("2024-01-04"), false, 0),
            task("newer", Some("2024-01-04"), false, 10),
            task("undated old", None, false, 1),
            task("bad date", Some("whenever"), false, 5),
        ];
        let visible = visible_tasks(&tasks, &Query::default(), now());
        assert_eq!(texts(&visible), ["newer", "older", "bad date", "undated old"]);
    }

    #[test]
    fn test_filter_modes() {
        let tasks = scenario();

        let pending = visible_tasks(&tasks, &Query::new(FilterMode::Pending, ""), now());
        assert!(pending.iter().all(|t| !t.is_done()));
        assert_eq!(pending.len(), 3);

        let completed = visible_tasks(&tasks, &Query::new(FilterMode::Completed, ""), now());
        assert!(completed.iter().all(|t| t.is_done()));
        assert_eq!(texts(&completed), ["C"]);

        let today = visible_tasks(&tasks, &Query::new(FilterMode::Today, ""), now());
        assert_eq!(texts(&today), ["B"]);

        let all = visible_tasks(&tasks, &Query::new(FilterMode::All, "   "), now());
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_search_overrides_filter() {
        let tasks = vec![
            task("Write ABC report", Some("2024-01-05"), false, 0),
            task("abc groceries", Some("2024-01-04"), true, 1),
            task("Unrelated", Some("2024-01-04"), true, 2),
        ];

        let visible = visible_tasks(&tasks, &Query::new(FilterMode::Completed, "abc"), now());
        assert_eq!(texts(&visible), ["Write ABC report", "abc groceries"]);

        let visible = visible_tasks(&tasks, &Query::new(FilterMode::Today, "  Abc "), now());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let tasks = scenario();
        let before = tasks.clone();
        let _ = visible_tasks(&tasks, &Query::default(), now());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_filter_mode_parse_and_display() {
        for mode in FilterMode::ALL {
            assert_eq!(mode.to_string().parse::<FilterMode>().unwrap(), mode);
        }
        assert_eq!("Today".parse::<FilterMode>().unwrap(), FilterMode::Today);
        assert!("archived".parse::<FilterMode>().is_err());
    }
}
