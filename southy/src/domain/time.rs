//! Local departure time handling.
//!
//! The reservation API reports departure dates ("YYYY-MM-DD") and times
//! ("HH:MM") as wall-clock values at the departure airport. This module turns
//! them into absolute UTC instants using the airport's IANA timezone.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::AirportCode;

/// Error returned when a local date/time cannot be resolved to an instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The airport has no directory entry, so its timezone is unknown.
    #[error("unknown timezone for airport {0}")]
    UnknownTimezone(String),

    /// The date was not in YYYY-MM-DD form.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The time was not in HH:MM or HH:MM:SS form.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// The wall-clock time falls in a DST gap and never occurs locally.
    #[error("{date} {time} does not exist in {timezone}")]
    NonexistentLocalTime {
        date: NaiveDate,
        time: NaiveTime,
        timezone: Tz,
    },
}

impl TimeError {
    pub(crate) fn unknown_timezone(code: &str) -> Self {
        TimeError::UnknownTimezone(code.to_string())
    }
}

/// Parse a "YYYY-MM-DD" departure date.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an "HH:MM" (or "HH:MM:SS") departure time.
pub fn parse_local_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Interpret a wall-clock date and time in `timezone` and convert it to UTC.
///
/// Ambiguous times (the repeated hour when DST ends) resolve to the earlier
/// instant. Times inside a DST gap are rejected.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use chrono_tz::America::Cancun;
/// use southy::domain::local_to_utc;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
/// let utc = local_to_utc(date, time, Cancun).unwrap();
/// assert_eq!(utc.to_rfc3339(), "2024-03-10T19:30:00+00:00");
/// ```
pub fn local_to_utc(
    date: NaiveDate,
    time: NaiveTime,
    timezone: Tz,
) -> Result<DateTime<Utc>, TimeError> {
    timezone
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(TimeError::NonexistentLocalTime {
            date,
            time,
            timezone,
        })
}

/// Resolve departure strings at a known airport timezone to a UTC instant.
pub fn resolve_in_zone(
    local_date: &str,
    local_time: &str,
    timezone: Tz,
) -> Result<DateTime<Utc>, TimeError> {
    let date = parse_local_date(local_date)?;
    let time = parse_local_time(local_time)?;
    local_to_utc(date, time, timezone)
}

/// Format a UTC instant as wall-clock time at an airport, for display.
pub fn format_local(instant: DateTime<Utc>, timezone: Tz, code: &AirportCode) -> String {
    format!(
        "{} {}",
        instant.with_timezone(&timezone).format("%a %b %-d %Y %-I:%M %p"),
        code
    )
}
