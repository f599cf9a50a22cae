//! Southwest mobile API client.
//!
//! This module provides the HTTP client for the airline's mobile API, which
//! serves reservation lookups and the two-phase check-in handshake.
//!
//! Key characteristics of the API:
//! - Every request carries a fixed client identifier and an API key header
//! - Technical failures come back as `errmsg` + non-zero `opstatus` records
//!   and usually succeed when the identical request is reissued
//! - Business rejections (`NOT_FOUND`, `BAD_REQUEST`, ...) are regular JSON
//!   responses, not HTTP errors
//! - Fields are omitted rather than sent as null

mod client;
mod error;
pub mod mock;
mod retry;
mod transport;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_CLIENT_ID, EMPTY_BODY_ERRMSG, SouthwestClient, SouthwestConfig,
};
pub use error::SouthwestError;
pub use mock::MockTransport;
pub use retry::{DEFAULT_MAX_RETRIES, RetryPolicy};
pub use transport::{
    API_KEY_HEADER, ApiRequest, CHECK_IN, CHECK_IN_SESSION, CLIENT_ID_HEADER, HttpTransport,
    Method, Transport, VIEW_RESERVATION,
};
pub use types::{
    AirportRef, ApiEnvelope, ApiStatus, BoardingPass, BoardingPosition, Bound, CheckInBody,
    CheckInResponse, CheckInSessionResponse, CheckedInFlight, ConfirmationPage, FlightNumber,
    Passenger, ReservationPage, Stop, ViewReservationResponse,
};
