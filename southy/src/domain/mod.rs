//! Domain types for reservation tracking.
//!
//! This module contains the validated data model the flows produce: airport
//! codes, flights with their boarding assignments, passenger name handling
//! and local-to-UTC time conversion. Types enforce their invariants at
//! construction time.

mod airport;
mod flight;
mod name;
mod time;

pub use airport::{Airport, AirportCode, InvalidAirportCode};
pub use flight::{Boarding, Flight, FlightLeg};
pub use name::{alternate, capitalize, split_full_name};
pub use time::{
    TimeError, format_local, local_to_utc, parse_local_date, parse_local_time, resolve_in_zone,
};
