//! Source of the current instant

use std::cell::Cell;

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Utc};

/// Supplies "now" to the store and the view.
pub trait Clock {
    /// Current instant with the local UTC offset attached
    fn now(&self) -> DateTime<FixedOffset>;

    /// Wall-clock time in the local zone
    fn local(&self) -> NaiveDateTime {
        self.now().naive_local()
    }

    /// Current instant in UTC, used for creation timestamps
    fn utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// Clock backed by the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a given instant, moved only by [`FixedClock::advance`]
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Pin the clock to a local wall time in a UTC+0 zone
    pub fn at(local: NaiveDateTime) -> Self {
        Self::new(local.and_utc().fixed_offset())
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_advances() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let clock = FixedClock::at(start);
        assert_eq!(clock.local(), start);

        clock.advance(Duration::hours(16));
        assert_eq!(
            clock.local().date(),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
        );
        assert_eq!(clock.utc().naive_utc(), start + Duration::hours(16));
    }
}
