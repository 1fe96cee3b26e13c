//! ISO-8601 rendering of epoch timestamps with an explicit UTC offset.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{DomainError, DomainResult};

/// `YYYY-MM-DDTHH:mm:ss.sss±HH:MM`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Renders epoch milliseconds as local time in the given offset.
///
/// The offset follows ISO-8601: zones east of UTC render with `+`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTimestamp`] if the value is outside the
/// representable calendar range.
pub fn format_timestamp(epoch_millis: i64, offset: FixedOffset) -> DomainResult<String> {
    let at = DateTime::from_timestamp_millis(epoch_millis)
        .ok_or(DomainError::InvalidTimestamp(epoch_millis))?;
    Ok(format_datetime(at, offset))
}

/// Renders an instant as local time in the given offset.
#[must_use]
pub fn format_datetime(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
}
