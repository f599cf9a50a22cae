//! Southwest mobile API response DTOs.
//!
//! These types map directly to the JSON the mobile API returns. They use
//! `Option` liberally because the API omits fields rather than sending null
//! values, and which fields appear varies between reservations. Nothing here
//! is validated; conversion into domain types happens in the flows.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Status fields shared by every response.
///
/// A response can carry a technical failure (`errmsg` with a non-zero
/// `opstatus`), a business rejection (`httpStatusCode` such as
/// `NOT_FOUND` plus a `message`), or neither.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiStatus {
    /// Technical error message.
    pub errmsg: Option<String>,

    /// Operational status code; zero or absent means the call went through.
    pub opstatus: Option<i64>,

    /// Business status, e.g. "BAD_REQUEST", "NOT_FOUND".
    pub http_status_code: Option<String>,

    /// Human-readable explanation accompanying `http_status_code`.
    pub message: Option<String>,
}

impl ApiStatus {
    /// The technical error message, if non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.errmsg.as_deref().filter(|m| !m.is_empty())
    }

    /// The business status code, if non-empty.
    pub fn status_code(&self) -> Option<&str> {
        self.http_status_code.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether this is a retryable technical failure.
    pub fn is_transient(&self) -> bool {
        self.error_message().is_some() && self.opstatus.is_some_and(|s| s != 0)
    }
}

/// A response that carries the shared status fields.
pub trait ApiEnvelope {
    fn status(&self) -> &ApiStatus;

    fn is_transient(&self) -> bool {
        self.status().is_transient()
    }
}

/// Response from `view-reservation`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewReservationResponse {
    #[serde(flatten)]
    pub status: ApiStatus,

    pub view_reservation_view_page: Option<ReservationPage>,
}

/// The reservation itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationPage {
    pub confirmation_number: Option<String>,

    /// One bound per direction of travel.
    pub bounds: Option<Vec<Bound>>,

    pub passengers: Option<Vec<Passenger>>,
}

/// One directional itinerary (outbound or return).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bound {
    /// Local departure date at the origin, "YYYY-MM-DD".
    pub departure_date: Option<String>,

    /// Local scheduled departure time at the origin, "HH:MM".
    pub departure_time: Option<String>,

    pub departure_airport: Option<AirportRef>,

    pub arrival_airport: Option<AirportRef>,

    /// Flight legs, in order.
    pub flights: Option<Vec<FlightNumber>>,

    /// Intermediate stops, in order.
    pub stops: Option<Vec<Stop>>,
}

/// An airport mentioned in a bound or stop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirportRef {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// A flight leg within a bound.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlightNumber {
    #[serde(deserialize_with = "string_or_number")]
    pub number: Option<String>,
}

/// An intermediate stop within a bound.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stop {
    pub airport: Option<AirportRef>,

    /// Local arrival time at the stop.
    pub arrival_time: Option<String>,

    /// Local departure time from the stop.
    pub departure_time: Option<String>,

    pub change_planes: Option<bool>,
}

/// A passenger on the reservation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Passenger {
    /// Full name, e.g. "JOHN Q PUBLIC".
    pub name: Option<String>,
}

/// Response from the first check-in phase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckInSessionResponse {
    #[serde(flatten)]
    pub status: ApiStatus,

    pub check_in_session_token: Option<String>,
}

impl CheckInSessionResponse {
    /// The session token, if non-empty.
    pub fn token(&self) -> Option<&str> {
        self.check_in_session_token
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

/// Body of the second check-in phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInBody {
    pub record_locator: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in_session_token: String,
}

/// Response from the second check-in phase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckInResponse {
    #[serde(flatten)]
    pub status: ApiStatus,

    pub check_in_confirmation_page: Option<ConfirmationPage>,
}

/// Boarding results grouped by flight.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmationPage {
    pub flights: Option<Vec<CheckedInFlight>>,
}

/// Boarding results for one flight number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckedInFlight {
    #[serde(deserialize_with = "string_or_number")]
    pub flight_number: Option<String>,
    pub passengers: Option<Vec<BoardingPass>>,
}

/// One passenger's boarding assignment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardingPass {
    pub name: Option<String>,
    pub boarding_group: Option<String>,
    pub boarding_position: Option<BoardingPosition>,
}

/// Boarding position as sent by the API: sometimes a number, sometimes a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoardingPosition {
    Number(u32),
    Text(String),
}

impl BoardingPosition {
    pub fn value(&self) -> Option<u32> {
        match self {
            BoardingPosition::Number(n) => Some(*n),
            BoardingPosition::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Read a field the API sends as either a string or a number.
///
/// Any other JSON type reads as absent.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Number(number)) => Some(number.to_string()),
        Some(Raw::Other(_)) | None => None,
    })
}

impl ApiEnvelope for ViewReservationResponse {
    fn status(&self) -> &ApiStatus {
        &self.status
    }
}

impl ApiEnvelope for CheckInSessionResponse {
    fn status(&self) -> &ApiStatus {
        &self.status
    }
}

impl ApiEnvelope for CheckInResponse {
    fn status(&self) -> &ApiStatus {
        &self.status
    }
}
