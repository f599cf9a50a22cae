//! Southwest reservation lookup and check-in.
//!
//! Looks up a reservation through the airline's mobile API, flattens it into
//! one [`Flight`](domain::Flight) per passenger per leg, and checks
//! passengers in, recording their boarding group and position.

pub mod airline;
pub mod airports;
pub mod checkin;
pub mod config;
pub mod domain;
pub mod lookup;
pub mod persist;
pub mod southwest;
