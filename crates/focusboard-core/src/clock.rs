//! Time source used by every calendar-day computation.
//!
//! Daily stats rollover, report grouping and the board's "completed today"
//! filter all compare local calendar dates. Routing them through a [`Clock`]
//! keeps those rules deterministic under test.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Offset of the local calendar that day boundaries follow.
    fn offset(&self) -> FixedOffset;

    /// Calendar date of `instant` in the local calendar.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset()).date_naive()
    }

    /// Today's calendar date.
    fn today(&self) -> NaiveDate {
        self.local_date(self.now())
    }
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        Local::now().offset().fix()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    pub fn with_offset(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// Midday UTC of the given date, which keeps same-day arithmetic simple.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or_else(Utc::now);
        Self::new(noon)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}
