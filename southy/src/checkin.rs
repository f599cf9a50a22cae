//! Two-phase check-in.
//!
//! Phase one opens a session for the reservation and yields a session token.
//! Phase two submits the token and returns a confirmation page listing the
//! boarding assignment of every passenger that was checked in. Assignments
//! are written back onto the caller's flights in place.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::Flight;
use crate::persist::ResponsePersister;
use crate::southwest::{
    ApiRequest, CheckInResponse, CheckInSessionResponse, ConfirmationPage, SouthwestClient,
    SouthwestError, Transport,
};

/// Flights that received a boarding assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckInResult {
    pub flights: Vec<Flight>,
}

impl CheckInResult {
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl<T: Transport, P: ResponsePersister> SouthwestClient<T, P> {
    /// Check in the passengers of one reservation.
    ///
    /// All `flights` must share a confirmation number; the first one supplies
    /// the identity for the handshake. Matching flights get their boarding
    /// group and position set in place, and copies of them are returned.
    /// Every rejection along the way is logged and yields an empty result.
    pub async fn check_in(&self, flights: &mut [Flight]) -> Result<CheckInResult, SouthwestError> {
        let Some(first) = flights.first() else {
            return Ok(CheckInResult::default());
        };
        let confirmation = first.confirmation_number.clone();
        let first_name = first.first_name.clone();
        let last_name = first.last_name.clone();

        let request = ApiRequest::check_in_session(&confirmation, &first_name, &last_name);
        let session: CheckInSessionResponse = self.send_with_retry(&request).await?;
        let Some(token) = session.token() else {
            warn!(
                confirmation = %confirmation,
                errmsg = session.status.error_message().unwrap_or_default(),
                "no check-in session token"
            );
            return Ok(CheckInResult::default());
        };
        debug!(confirmation = %confirmation, "check-in session opened");

        let request = ApiRequest::check_in(&confirmation, &first_name, &last_name, token);
        let response: CheckInResponse = self.send_with_retry(&request).await?;
        if let Some(errmsg) = response.status.error_message() {
            warn!(confirmation = %confirmation, errmsg, "check-in failed");
            return Ok(CheckInResult::default());
        }

        let Some(page) = &response.check_in_confirmation_page else {
            warn!(confirmation = %confirmation, "check-in response has no confirmation page");
            return Ok(CheckInResult::default());
        };

        let result = apply_boarding(page, flights);
        info!(
            confirmation = %confirmation,
            checked_in = result.flights.len(),
            "check-in complete"
        );
        Ok(result)
    }
}

/// Write boarding assignments from a confirmation page onto `flights`.
///
/// Entries are matched on exact flight number and full name, each flight
/// taking at most one entry. Entries with no matching flight, or without a
/// usable group and position, are dropped.
pub fn apply_boarding(page: &ConfirmationPage, flights: &mut [Flight]) -> CheckInResult {
    let mut result = CheckInResult::default();
    let mut boarded = vec![false; flights.len()];

    for checked in page.flights.iter().flatten() {
        let Some(number) = checked.flight_number.as_deref() else {
            continue;
        };
        for pass in checked.passengers.iter().flatten() {
            let Some(name) = pass.name.as_deref() else {
                continue;
            };
            let Some(index) = (0..flights.len()).find(|&i| {
                !boarded[i] && flights[i].number == number && flights[i].full_name() == name
            }) else {
                debug!(flight = number, name, "no matching flight for boarding pass");
                continue;
            };

            let group = pass.boarding_group.as_deref().filter(|g| !g.is_empty());
            let position = pass.boarding_position.as_ref().and_then(|p| p.value());
            match (group, position) {
                (Some(group), Some(position)) => {
                    let flight = &mut flights[index];
                    flight.set_boarding(group, position);
                    boarded[index] = true;
                    result.flights.push(flight.clone());
                }
                _ => warn!(flight = number, name, "boarding pass without group and position"),
            }
        }
    }

    result
}
