//! Airport directory: code → display name and timezone.
//!
//! Reservation payloads only carry airport codes and local wall-clock
//! times. The directory supplies the display name shown to the traveller
//! and the timezone needed to turn a local departure into a UTC instant.
//! Unknown codes are expected (new or unlisted airports) and are reported as
//! `None`, never as an error.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::{Airport, AirportCode, TimeError, resolve_in_zone};

mod southwest;

/// Lookup table of airports keyed by code.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: HashMap<AirportCode, Airport>,
}

static SOUTHWEST: LazyLock<Arc<AirportDirectory>> =
    LazyLock::new(|| Arc::new(southwest::airports()));

impl AirportDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide directory of airports the airline serves.
    ///
    /// Built on first use and shared from then on.
    pub fn southwest() -> Arc<AirportDirectory> {
        Arc::clone(&SOUTHWEST)
    }

    /// Add an airport, replacing any previous entry for the same code.
    pub fn insert(&mut self, airport: Airport) {
        self.airports.insert(airport.code, airport);
    }

    /// Look up an airport by its code.
    ///
    /// Malformed codes are treated the same as unknown ones.
    pub fn lookup(&self, code: &str) -> Option<&Airport> {
        let code = AirportCode::parse(code).ok()?;
        self.airports.get(&code)
    }

    /// Resolve a local departure date and time at `code` to a UTC instant.
    ///
    /// Fails with [`TimeError::UnknownTimezone`] when the airport is not in
    /// the directory; callers should validate the code with [`lookup`]
    /// first.
    ///
    /// [`lookup`]: AirportDirectory::lookup
    pub fn resolve(
        &self,
        local_date: &str,
        local_time: &str,
        code: &str,
    ) -> Result<DateTime<Utc>, TimeError> {
        let airport = self
            .lookup(code)
            .ok_or_else(|| TimeError::unknown_timezone(code))?;
        resolve_in_zone(local_date, local_time, airport.timezone)
    }

    /// Number of airports in the directory.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Builder for creating airport directories.
#[derive(Debug, Default)]
pub struct AirportDirectoryBuilder {
    inner: AirportDirectory,
}

impl AirportDirectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport. Entries with an invalid code are ignored.
    pub fn add(mut self, code: &str, name: &str, timezone: Tz) -> Self {
        if let Ok(code) = AirportCode::parse(code) {
            self.inner.insert(Airport::new(code, name, timezone));
        }
        self
    }

    pub fn build(self) -> AirportDirectory {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::{Cancun, Chicago};

    #[test]
    fn empty_directory() {
        let directory = AirportDirectory::new();
        assert!(directory.is_empty());
        assert!(directory.lookup("DAL").is_none());
    }

    #[test]
    fn builder_ignores_invalid_codes() {
        let directory = AirportDirectoryBuilder::new()
            .add("DAL", "Dallas (Love Field), TX", Chicago)
            .add("dal", "lowercase", Chicago)
            .add("DALL", "too long", Chicago)
            .build();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("DAL").unwrap().name, "Dallas (Love Field), TX");
    }

    #[test]
    fn unknown_and_malformed_codes_are_none() {
        let directory = AirportDirectory::southwest();
        assert!(directory.lookup("XQZ").is_none());
        assert!(directory.lookup("").is_none());
        assert!(directory.lookup("dal").is_none());
    }

    #[test]
    fn southwest_directory_has_core_airports() {
        let directory = AirportDirectory::southwest();
        for code in ["DAL", "HOU", "MDW", "BWI", "LAS", "PHX", "DEN", "OAK", "HNL", "CUN"] {
            assert!(directory.lookup(code).is_some(), "missing {code}");
        }
        assert_eq!(directory.lookup("MDW").unwrap().timezone, Chicago);
    }

    #[test]
    fn resolve_uses_airport_timezone() {
        let directory = AirportDirectoryBuilder::new()
            .add("CUN", "Cancun, Mexico", Cancun)
            .build();
        let utc = directory.resolve("2024-03-10", "14:30", "CUN").unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-03-10T19:30:00+00:00");
    }

    #[test]
    fn resolve_unknown_airport_fails() {
        let directory = AirportDirectory::new();
        assert_eq!(
            directory.resolve("2024-03-10", "14:30", "ZZZ"),
            Err(TimeError::UnknownTimezone("ZZZ".to_string()))
        );
    }
}
