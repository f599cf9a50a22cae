//! Reservation lookup.
//!
//! Retrieves a reservation, retries once with the alternate name split when
//! the airline cannot find it, classifies business rejections, and flattens
//! the itinerary into one [`Flight`] per passenger per leg.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::airports::AirportDirectory;
use crate::domain::{AirportCode, Flight, FlightLeg, TimeError, alternate, split_full_name};
use crate::persist::ResponsePersister;
use crate::southwest::{
    AirportRef, ApiRequest, Bound, ReservationPage, SouthwestClient, SouthwestError, Transport,
    ViewReservationResponse,
};

const BAD_REQUEST: &str = "BAD_REQUEST";
const NOT_FOUND: &str = "NOT_FOUND";
const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

const UNPARSABLE_RESERVATION: &str = "unparsable reservation";

/// Why a lookup produced no flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The lookup succeeded.
    None,
    /// The airline rejected the request as malformed.
    Invalid,
    /// No reservation matches the confirmation number and name.
    NotFound,
    /// The airline reported an internal error.
    Internal,
    /// The response was missing a required section.
    Failure,
}

/// Outcome of a reservation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub error: ErrorKind,
    pub reason: Option<String>,
    /// Flights keyed by confirmation number, in itinerary order.
    pub flights: BTreeMap<String, Vec<Flight>>,
}

impl LookupResult {
    fn failed(error: ErrorKind, reason: Option<String>) -> Self {
        Self {
            error,
            reason,
            flights: BTreeMap::new(),
        }
    }

    fn failure(reason: &str) -> Self {
        Self::failed(ErrorKind::Failure, Some(reason.to_string()))
    }

    fn found(confirmation: String, flights: Vec<Flight>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(confirmation, flights);
        Self {
            error: ErrorKind::None,
            reason: None,
            flights: map,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error == ErrorKind::None
    }

    /// All flights across confirmation numbers.
    pub fn all_flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.values().flatten()
    }
}

/// Reason a leg was left out of the flattened itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegSkip {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unknown airport {0:?}")]
    UnknownAirport(String),

    #[error("bad departure time: {0}")]
    Time(#[from] TimeError),
}

impl<T: Transport, P: ResponsePersister> SouthwestClient<T, P> {
    /// Look up a reservation by confirmation number and passenger name.
    ///
    /// Business and structural failures, including a payload that does not
    /// decode, are reported in the result; only transport failures are
    /// errors.
    pub async fn lookup_reservation(
        &self,
        confirmation: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<LookupResult, SouthwestError> {
        match self
            .fetch_reservation(confirmation, first_name, last_name)
            .await
        {
            Ok(response) => Ok(classify_reservation(confirmation, &response, self.airports())),
            Err(SouthwestError::Decode { message, .. }) => {
                warn!(confirmation, message = %message, "unparsable reservation");
                Ok(LookupResult::failure(UNPARSABLE_RESERVATION))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the reservation, retrying once with the alternate name split
    /// when it is not found.
    async fn fetch_reservation(
        &self,
        confirmation: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<ViewReservationResponse, SouthwestError> {
        let response = self
            .view_reservation(confirmation, first_name, last_name)
            .await?;
        if response.status.status_code() != Some(NOT_FOUND) {
            return Ok(response);
        }

        let (alt_first, alt_last) = alternate(first_name, last_name);
        if alt_first == first_name && alt_last == last_name {
            return Ok(response);
        }

        info!(
            confirmation,
            first_name = %alt_first,
            last_name = %alt_last,
            "reservation not found, trying alternate name"
        );
        self.view_reservation(confirmation, &alt_first, &alt_last)
            .await
    }

    async fn view_reservation(
        &self,
        confirmation: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<ViewReservationResponse, SouthwestError> {
        let request = ApiRequest::view_reservation(confirmation, first_name, last_name);
        self.send_with_retry(&request).await
    }
}

/// Turn a reservation response into a lookup result.
pub fn classify_reservation(
    confirmation: &str,
    response: &ViewReservationResponse,
    airports: &AirportDirectory,
) -> LookupResult {
    let status = &response.status;
    let kind = match status.status_code() {
        Some(BAD_REQUEST) => Some(ErrorKind::Invalid),
        Some(NOT_FOUND) => Some(ErrorKind::NotFound),
        Some(INTERNAL_SERVER_ERROR) => Some(ErrorKind::Internal),
        Some(other) => {
            warn!(confirmation, status = other, "unrecognized status code");
            None
        }
        None => None,
    };
    if let Some(kind) = kind {
        return LookupResult::failed(kind, status.message.clone());
    }

    if let Some(errmsg) = status.error_message() {
        warn!(confirmation, errmsg, "reservation lookup returned an error");
    }

    match &response.view_reservation_view_page {
        Some(page) => flatten_reservation(confirmation, page, airports),
        None => LookupResult::failure("no reservation"),
    }
}

/// Flatten a reservation into one flight per passenger per leg.
///
/// Legs whose airports are unknown, or whose departure cannot be resolved,
/// are skipped and logged without failing the lookup.
pub fn flatten_reservation(
    requested_confirmation: &str,
    page: &ReservationPage,
    airports: &AirportDirectory,
) -> LookupResult {
    let bounds = match page.bounds.as_deref() {
        Some(bounds) if !bounds.is_empty() => bounds,
        _ => return LookupResult::failure("no flights"),
    };
    let passengers = match page.passengers.as_deref() {
        Some(passengers) if !passengers.is_empty() => passengers,
        _ => return LookupResult::failure("no passengers"),
    };

    let confirmation = page
        .confirmation_number
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(requested_confirmation)
        .to_string();

    let names: Vec<(String, String)> = passengers
        .iter()
        .filter_map(|p| {
            let name = p.name.as_deref().and_then(split_full_name);
            if name.is_none() {
                debug!(confirmation = %confirmation, "skipping passenger without a name");
            }
            name
        })
        .collect();

    let mut flights = Vec::new();
    for bound in bounds {
        for leg in bound_legs(bound, airports) {
            for (first, last) in &names {
                flights.push(leg.for_passenger(&confirmation, first, last));
            }
        }
    }

    LookupResult::found(confirmation, flights)
}

/// Resolve every leg of a bound, dropping the ones that cannot be resolved.
fn bound_legs(bound: &Bound, airports: &AirportDirectory) -> Vec<FlightLeg> {
    let legs = bound.flights.as_deref().unwrap_or_default();

    legs.iter()
        .enumerate()
        .filter_map(|(index, leg)| {
            let number = leg.number.as_deref().unwrap_or_default();
            match resolve_leg(bound, index, legs.len(), number, airports) {
                Ok(resolved) => Some(resolved),
                Err(skip) => {
                    warn!(flight = number, leg = index, "skipping leg: {skip}");
                    None
                }
            }
        })
        .collect()
}

/// Resolve leg `index` of a bound with `count` legs.
///
/// The first leg departs the bound's origin at its scheduled time; later legs
/// depart the previous stop. The last leg arrives at the bound's destination;
/// earlier legs arrive at the stop with the same index.
fn resolve_leg(
    bound: &Bound,
    index: usize,
    count: usize,
    number: &str,
    airports: &AirportDirectory,
) -> Result<FlightLeg, LegSkip> {
    let stops = bound.stops.as_deref().unwrap_or_default();

    let (depart_ref, depart_time) = if index == 0 {
        (bound.departure_airport.as_ref(), bound.departure_time.as_deref())
    } else {
        let stop = stops.get(index - 1).ok_or(LegSkip::Missing("departure stop"))?;
        (stop.airport.as_ref(), stop.departure_time.as_deref())
    };

    let arrive_ref = if index + 1 == count {
        bound.arrival_airport.as_ref()
    } else {
        stops
            .get(index)
            .ok_or(LegSkip::Missing("arrival stop"))?
            .airport
            .as_ref()
    };

    let (depart_code, depart_airport) = known_airport(depart_ref, airports)?;
    let (arrive_code, arrive_airport) = known_airport(arrive_ref, airports)?;

    let date = bound
        .departure_date
        .as_deref()
        .ok_or(LegSkip::Missing("departure date"))?;
    let time = depart_time.ok_or(LegSkip::Missing("departure time"))?;
    let depart_date = airports.resolve(date, time, depart_code.as_str())?;

    Ok(FlightLeg {
        number: number.to_string(),
        depart_date,
        depart_code,
        depart_airport,
        arrive_code,
        arrive_airport,
    })
}

fn known_airport(
    airport: Option<&AirportRef>,
    airports: &AirportDirectory,
) -> Result<(AirportCode, String), LegSkip> {
    let code = airport
        .and_then(|a| a.code.as_deref())
        .ok_or(LegSkip::Missing("airport code"))?;
    let airport = airports
        .lookup(code)
        .ok_or_else(|| LegSkip::UnknownAirport(code.to_string()))?;
    Ok((airport.code, airport.name.clone()))
}
