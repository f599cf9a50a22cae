//! Flight records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AirportCode;

/// Boarding assignment handed out at check-in.
///
/// Group and position only ever exist together, so a [`Flight`] holds an
/// `Option<Boarding>` rather than two independent optionals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boarding {
    /// Boarding group letter, e.g. "A".
    pub group: String,
    /// Position within the group.
    pub position: u32,
}

impl fmt::Display for Boarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group, self.position)
    }
}

/// One passenger on one leg of one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub confirmation_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Flight number as printed on the itinerary, e.g. "1234".
    pub number: String,
    /// Departure instant, derived from the local time at `depart_code`.
    pub depart_date: DateTime<Utc>,
    pub depart_code: AirportCode,
    pub depart_airport: String,
    pub arrive_code: AirportCode,
    pub arrive_airport: String,
    #[serde(flatten)]
    boarding: Option<Boarding>,
}

impl Flight {
    /// Passenger's full name as the check-in confirmation reports it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn boarding(&self) -> Option<&Boarding> {
        self.boarding.as_ref()
    }

    pub fn group(&self) -> Option<&str> {
        self.boarding.as_ref().map(|b| b.group.as_str())
    }

    pub fn position(&self) -> Option<u32> {
        self.boarding.as_ref().map(|b| b.position)
    }

    pub fn is_checked_in(&self) -> bool {
        self.boarding.is_some()
    }

    /// Record the boarding assignment from a successful check-in.
    pub fn set_boarding(&mut self, group: impl Into<String>, position: u32) {
        self.boarding = Some(Boarding {
            group: group.into(),
            position,
        });
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} SW{} {} -> {} {}",
            self.confirmation_number,
            self.full_name(),
            self.number,
            self.depart_code,
            self.arrive_code,
            self.depart_date.format("%Y-%m-%d %H:%M UTC"),
        )?;
        if let Some(boarding) = &self.boarding {
            write!(f, " [{boarding}]")?;
        }
        Ok(())
    }
}

/// Builder for [`Flight`], used when flattening reservations.
#[derive(Debug, Clone)]
pub struct FlightLeg {
    pub number: String,
    pub depart_date: DateTime<Utc>,
    pub depart_code: AirportCode,
    pub depart_airport: String,
    pub arrive_code: AirportCode,
    pub arrive_airport: String,
}

impl FlightLeg {
    /// Produce the passenger's flight on this leg.
    pub fn for_passenger(
        &self,
        confirmation_number: &str,
        first_name: &str,
        last_name: &str,
    ) -> Flight {
        Flight {
            confirmation_number: confirmation_number.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            number: self.number.clone(),
            depart_date: self.depart_date,
            depart_code: self.depart_code,
            depart_airport: self.depart_airport.clone(),
            arrive_code: self.arrive_code,
            arrive_airport: self.arrive_airport.clone(),
            boarding: None,
        }
    }
}
