//! Clock port for time-related operations

use chrono::{DateTime, FixedOffset, Utc};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a mock implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the process's local UTC offset at the time of the call.
    fn local_offset(&self) -> FixedOffset;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn local_offset(&self) -> FixedOffset {
        (**self).local_offset()
    }
}
