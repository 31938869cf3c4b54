//! Calendar helpers for due dates
//!
//! Due dates are calendar days in the local zone. They are kept as the raw
//! string the user entered; [`parse_due`] is the only place they are read.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::locale::Labels;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse a stored due date.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps. Returns `None` for
/// anything else, including the empty string.
pub fn parse_due(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Same calendar day as `now`
pub fn is_today(date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date()
}

/// Strictly before today; a task due today is never overdue
pub fn is_overdue(date: NaiveDate, now: NaiveDateTime) -> bool {
    date < now.date()
}

/// Whole days from `now` until the start of `date`, rounded up.
///
/// Anything later today counts as 0, yesterday as -1.
pub fn days_until(date: NaiveDate, now: NaiveDateTime) -> i64 {
    let diff = (date.and_time(NaiveTime::MIN) - now).num_milliseconds();
    let days = diff / MILLIS_PER_DAY;
    if diff % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Display label for a raw due date.
///
/// "Today" and "tomorrow" get fixed words, other dates a long form.
/// Input that does not parse is echoed back unchanged.
pub fn format_for_display(raw: &str, now: NaiveDateTime, labels: &Labels) -> String {
    let Some(date) = parse_due(raw) else {
        return raw.to_string();
    };

    let today = now.date();
    if date == today {
        labels.today.to_string()
    } else if today.succ_opt() == Some(date) {
        labels.tomorrow.to_string()
    } else {
        labels.long_date(date)
    }
}
