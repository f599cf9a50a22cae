//! Command-line front end for reservation lookup and check-in.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use southy::airline::lookup_and_checkin;
use southy::airports::AirportDirectory;
use southy::config::{FIRST_NAME_VAR, LAST_NAME_VAR, SouthyConfig};
use southy::domain::{Flight, format_local};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "southy")]
#[command(author, version, about = "Southwest reservation lookup and check-in", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a reservation and print it as JSON
    Lookup(Trip),
    /// Look up a reservation and list its flights in local time
    List(Trip),
    /// Look up a reservation, check everyone in, and print the boarding results as JSON
    Checkin(Trip),
}

#[derive(Args, Debug)]
struct Trip {
    /// Confirmation number (e.g., ABC123)
    confirmation: String,

    /// Passenger first name; defaults to SOUTHY_FIRST_NAME
    #[arg(short, long)]
    first: Option<String>,

    /// Passenger last name; defaults to SOUTHY_LAST_NAME
    #[arg(short, long)]
    last: Option<String>,
}

impl Trip {
    /// The traveller name, filling gaps from the configured default.
    fn names(&self, default: Option<&(String, String)>) -> Result<(String, String)> {
        let first = self
            .first
            .clone()
            .or_else(|| default.map(|(first, _)| first.clone()));
        let last = self
            .last
            .clone()
            .or_else(|| default.map(|(_, last)| last.clone()));

        match (first, last) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => bail!(
                "no traveller name: pass --first and --last or set {FIRST_NAME_VAR} and {LAST_NAME_VAR}"
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("southy=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SouthyConfig::from_env().context("Failed to read configuration")?;
    let client = config
        .client()
        .context("Failed to create Southwest client")?;

    match &cli.command {
        Command::Lookup(trip) => {
            let (first, last) = trip.names(config.default_name.as_ref())?;
            let result = client
                .lookup_reservation(&trip.confirmation, &first, &last)
                .await
                .context("Reservation lookup failed")?;
            print_json(&result)
        }
        Command::List(trip) => {
            let (first, last) = trip.names(config.default_name.as_ref())?;
            let result = client
                .lookup_reservation(&trip.confirmation, &first, &last)
                .await
                .context("Reservation lookup failed")?;
            if let Some(reason) = &result.reason {
                bail!("{:?}: {reason}", result.error);
            }
            for flight in result.all_flights() {
                println!("{}", describe(flight, client.airports()));
            }
            Ok(())
        }
        Command::Checkin(trip) => {
            let (first, last) = trip.names(config.default_name.as_ref())?;
            let (_, checked_in) = lookup_and_checkin(&client, &trip.confirmation, &first, &last)
                .await
                .context("Check-in failed")?;
            print_json(&checked_in)
        }
    }
}

/// One line per flight, with the departure in the origin's local time.
fn describe(flight: &Flight, airports: &AirportDirectory) -> String {
    let departs = match airports.lookup(flight.depart_code.as_str()) {
        Some(airport) => format_local(flight.depart_date, airport.timezone, &flight.depart_code),
        None => flight.depart_date.to_rfc3339(),
    };
    let boarding = flight
        .boarding()
        .map(|b| format!(" {b}"))
        .unwrap_or_default();
    format!(
        "{} SW{} {} {} -> {} ({}){}",
        flight.full_name(),
        flight.number,
        departs,
        flight.depart_airport,
        flight.arrive_airport,
        flight.confirmation_number,
        boarding,
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}
