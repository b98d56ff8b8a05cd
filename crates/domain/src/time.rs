//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Calendar date without a time zone, used for task due dates.
pub type Date = NaiveDate;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
