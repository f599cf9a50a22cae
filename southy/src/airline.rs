//! Airline abstraction.
//!
//! Callers that only need "look up a trip" and "check in" depend on
//! [`Airline`] rather than on the Southwest client directly, so they can be
//! exercised against a fake.

use tracing::info;

use crate::checkin::CheckInResult;
use crate::domain::Flight;
use crate::lookup::LookupResult;
use crate::persist::ResponsePersister;
use crate::southwest::{SouthwestClient, SouthwestError, Transport};

/// Something that can look up reservations and check passengers in.
#[allow(async_fn_in_trait)]
pub trait Airline {
    type Error;

    /// Look up a reservation by confirmation number and passenger name.
    async fn lookup(
        &self,
        confirmation: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<LookupResult, Self::Error>;

    /// Check in every passenger on `flights`, updating them in place.
    async fn checkin(&self, flights: &mut [Flight]) -> Result<CheckInResult, Self::Error>;
}

impl<T: Transport, P: ResponsePersister> Airline for SouthwestClient<T, P> {
    type Error = SouthwestError;

    async fn lookup(
        &self,
        confirmation: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<LookupResult, SouthwestError> {
        self.lookup_reservation(confirmation, first_name, last_name)
            .await
    }

    async fn checkin(&self, flights: &mut [Flight]) -> Result<CheckInResult, SouthwestError> {
        self.check_in(flights).await
    }
}

/// Look up a reservation and check in every confirmation number it holds.
///
/// Returns the lookup result, with flights updated in place, alongside the
/// flights that were checked in. A failed lookup skips check-in.
pub async fn lookup_and_checkin<A: Airline>(
    airline: &A,
    confirmation: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(LookupResult, CheckInResult), A::Error> {
    let mut lookup = airline.lookup(confirmation, first_name, last_name).await?;
    let mut checked_in = CheckInResult::default();

    if !lookup.is_ok() {
        info!(
            confirmation,
            error = ?lookup.error,
            reason = lookup.reason.as_deref().unwrap_or_default(),
            "lookup failed, skipping check-in"
        );
        return Ok((lookup, checked_in));
    }

    for flights in lookup.flights.values_mut() {
        let result = airline.checkin(flights).await?;
        checked_in.flights.extend(result.flights);
    }

    Ok((lookup, checked_in))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, FlightLeg};
    use crate::lookup::ErrorKind;
    use crate::southwest::{MockTransport, SouthwestConfig};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Fake airline that serves a fixed lookup and boards everyone in group A.
    struct FakeAirline {
        lookup: LookupResult,
        checkins: RefCell<Vec<String>>,
    }

    impl Airline for FakeAirline {
        type Error = String;

        async fn lookup(&self, _: &str, _: &str, _: &str) -> Result<LookupResult, String> {
            Ok(self.lookup.clone())
        }

        async fn checkin(&self, flights: &mut [Flight]) -> Result<CheckInResult, String> {
            let mut result = CheckInResult::default();
            for (i, flight) in flights.iter_mut().enumerate() {
                self.checkins.borrow_mut().push(flight.confirmation_number.clone());
                flight.set_boarding("A", i as u32 + 1);
                result.flights.push(flight.clone());
            }
            Ok(result)
        }
    }

    fn flight(confirmation: &str) -> Flight {
        FlightLeg {
            number: "1234".to_string(),
            depart_date: Utc.with_ymd_and_hms(2024, 3, 10, 14, 15, 0).unwrap(),
            depart_code: AirportCode::parse("DAL").unwrap(),
            depart_airport: "Dallas (Love Field), TX".to_string(),
            arrive_code: AirportCode::parse("HOU").unwrap(),
            arrive_airport: "Houston (Hobby), TX".to_string(),
        }
        .for_passenger(confirmation, "Jo", "Smith")
    }

    #[tokio::test]
    async fn checks_in_each_confirmation() {
        let mut flights = BTreeMap::new();
        flights.insert("ABC123".to_string(), vec![flight("ABC123")]);
        flights.insert("XYZ789".to_string(), vec![flight("XYZ789")]);
        let airline = FakeAirline {
            lookup: LookupResult {
                error: ErrorKind::None,
                reason: None,
                flights,
            },
            checkins: RefCell::new(Vec::new()),
        };

        let (lookup, checked_in) = lookup_and_checkin(&airline, "ABC123", "Jo", "Smith")
            .await
            .unwrap();

        assert_eq!(checked_in.flights.len(), 2);
        assert!(lookup.all_flights().all(Flight::is_checked_in));
        assert_eq!(*airline.checkins.borrow(), ["ABC123", "XYZ789"]);
    }

    #[tokio::test]
    async fn failed_lookup_skips_checkin() {
        let airline = FakeAirline {
            lookup: LookupResult {
                error: ErrorKind::NotFound,
                reason: Some("not found".to_string()),
                flights: BTreeMap::new(),
            },
            checkins: RefCell::new(Vec::new()),
        };

        let (lookup, checked_in) = lookup_and_checkin(&airline, "ABC123", "Jo", "Smith")
            .await
            .unwrap();

        assert_eq!(lookup.error, ErrorKind::NotFound);
        assert!(checked_in.is_empty());
        assert!(airline.checkins.borrow().is_empty());
    }

    #[tokio::test]
    async fn southwest_client_is_an_airline() {
        let client = SouthwestClient::with_transport(
            MockTransport::sequence([json!({ "httpStatusCode": "BAD_REQUEST" }).to_string()]),
            &SouthwestConfig::new("k"),
        );

        let (lookup, checked_in) = lookup_and_checkin(&client, "ABC123", "Jo", "Smith")
            .await
            .unwrap();

        assert_eq!(lookup.error, ErrorKind::Invalid);
        assert!(checked_in.is_empty());
        assert_eq!(client.transport().request_count(), 1);
    }
}
