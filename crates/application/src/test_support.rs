//! Shared test doubles.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::ports::Clock;

/// Clock frozen at 2024-01-01T00:00:00Z with a configurable local offset.
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn with_offset(seconds_east: i32) -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            offset: FixedOffset::east_opt(seconds_east).unwrap(),
        }
    }

    pub fn utc() -> Self {
        Self::with_offset(0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}
