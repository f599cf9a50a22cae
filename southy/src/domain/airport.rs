//! Airport code and reference data types.

use std::fmt;

use chrono_tz::Tz;
use serde::Serialize;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Codes are always 3 uppercase ASCII letters. Any `AirportCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use southy::domain::AirportCode;
///
/// let dal = AirportCode::parse("DAL").unwrap();
/// assert_eq!(dal.as_str(), "DAL");
///
/// assert!(AirportCode::parse("dal").is_err());
/// assert!(AirportCode::parse("DA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirportCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An airport served by the airline.
///
/// Immutable reference data, loaded once into an
/// [`AirportDirectory`](crate::airports::AirportDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub code: AirportCode,
    /// Display name, e.g. "Dallas (Love Field), TX".
    pub name: String,
    /// IANA timezone the airport's local times are expressed in.
    pub timezone: Tz,
}

impl Airport {
    pub fn new(code: AirportCode, name: impl Into<String>, timezone: Tz) -> Self {
        Self {
            code,
            name: name.into(),
            timezone,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,8}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        #[test]
        fn digits_rejected(s in "[A-Z0-9]{3}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
