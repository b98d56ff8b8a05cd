//! Column codecs shared by the repositories.
//!
//! Timestamps are stored as RFC 3339 text, due dates as `YYYY-MM-DD`.

use taskboard_domain::time::{Date, Timestamp};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

pub(crate) fn parse<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(decode_error)
}

pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(decode_error)
}

pub(crate) fn date(value: &str) -> Result<Date, sqlx::Error> {
    Date::parse_from_str(value, DATE_FORMAT).map_err(decode_error)
}

pub(crate) fn format_timestamp(value: Timestamp) -> String {
    value.to_rfc3339()
}

pub(crate) fn format_date(value: Date) -> String {
    value.format(DATE_FORMAT).to_string()
}
