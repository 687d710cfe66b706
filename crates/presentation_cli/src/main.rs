//! MoveRoute CLI
//!
//! Command-line front end for address resolution and route computation.

#![allow(clippy::print_stdout)]

mod input;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use application::{
    ChannelObserver, GeocodeClient, LocationBias, PlacesPort, SessionTokenManager,
    SuggestionClient,
};
use clap::{Parser, Subcommand};
use domain::{Coordinate, EndpointRole, Suggestion};
use infrastructure::{AppConfig, MapsSdk, init_telemetry};
use tracing::info;

use crate::input::{EndpointArg, parse_coordinate};

/// MoveRoute CLI
#[derive(Parser)]
#[command(name = "moveroute-cli")]
#[command(author, version, about = "MoveRoute address and route CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "MOVEROUTE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List address suggestions for partial text
    Suggest {
        /// Text typed so far
        text: String,

        /// Bias results around "lat,lng"
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        near: Option<Coordinate>,

        /// Bias radius in meters (defaults to booking.bias_radius_meters)
        #[arg(long)]
        radius: Option<u32>,
    },

    /// Resolve "lat,lng" to an address
    ///
    /// Falls back to the coordinate text when no address is known.
    Reverse {
        /// Coordinate as "lat,lng"
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        coordinate: Coordinate,
    },

    /// Resolve a free-text address to a coordinate
    Geocode {
        /// Address text
        address: String,
    },

    /// Compute a driving route between two endpoints
    ///
    /// Each endpoint is either "lat,lng" or address text.
    /// Example: moveroute-cli route --from "-23.55,-46.63" --to "Avenida Paulista, 1000"
    Route {
        /// Origin endpoint
        #[arg(long, allow_hyphen_values = true)]
        from: EndpointArg,

        /// Destination endpoint
        #[arg(long, allow_hyphen_values = true)]
        to: EndpointArg,
    },

    /// Interactive session reading one event per stdin line
    Session,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// One-shot suggestion query; service errors and blank text yield no matches
async fn query_suggestions(
    places: Arc<dyn PlacesPort>,
    text: &str,
    bias: Option<LocationBias>,
) -> Vec<Suggestion> {
    SuggestionClient::new(places, Arc::new(SessionTokenManager::new()))
        .query_suggestions(EndpointRole::Origin, text, bias)
        .await
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    let _telemetry = init_telemetry(&config.telemetry)?;

    let sdk = MapsSdk::init(&config)?;

    match cli.command {
        Commands::Suggest { text, near, radius } => {
            let radius = radius.unwrap_or(config.booking.bias_radius_meters);
            let bias = near.map(|center| LocationBias::new(center, radius));
            let suggestions = query_suggestions(sdk.places(), &text, bias).await;
            if suggestions.is_empty() {
                println!("No suggestions for {text:?}");
            }
            for suggestion in suggestions {
                println!("{}\t{}", suggestion.id, suggestion.description);
            }
        },

        Commands::Reverse { coordinate } => {
            let geocoder = GeocodeClient::new(
                sdk.places(),
                sdk.geocoding(),
                Arc::new(SessionTokenManager::new()),
            );
            print_json(&geocoder.reverse_geocode(coordinate).await)?;
        },

        Commands::Geocode { address } => {
            let geocoder = GeocodeClient::new(
                sdk.places(),
                sdk.geocoding(),
                Arc::new(SessionTokenManager::new()),
            );
            print_json(&geocoder.geocode_address(&address).await?)?;
        },

        Commands::Route { from, to } => {
            let machine = sdk.register(sdk.state_machine_builder());
            for (role, endpoint) in [(EndpointRole::Origin, from), (EndpointRole::Destination, to)] {
                match endpoint {
                    EndpointArg::Coordinate(coordinate) => {
                        machine.move_endpoint(role, coordinate).await;
                    },
                    EndpointArg::Address(text) => {
                        machine.set_address(role, &text).await?;
                    },
                }
            }
            if let Some(route) = machine.route() {
                info!(badge = %route.badge_text(), "Route computed");
            }
            print_json(&machine.snapshot())?;
        },

        Commands::Session => {
            let (observer, selections) = ChannelObserver::channel();
            let machine = sdk.register(sdk.state_machine_builder().observer(Arc::new(observer)));
            machine.prime_bias().await;
            println!("{}", session::HELP);
            session::run(&machine, selections).await?;
        },
    }

    sdk.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use application::ApplicationError;
    use async_trait::async_trait;
    use domain::{ResolvedPlace, SessionToken};

    use super::*;

    #[derive(Default)]
    struct DeniedPlaces {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlacesPort for DeniedPlaces {
        async fn suggest(
            &self,
            _text: &str,
            _bias: Option<LocationBias>,
            _token: SessionToken,
        ) -> Result<Vec<Suggestion>, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ApplicationError::SuggestionQueryFailed("REQUEST_DENIED".into()))
        }

        async fn place_details(
            &self,
            _suggestion_id: &str,
            _token: SessionToken,
        ) -> Result<ResolvedPlace, ApplicationError> {
            Err(ApplicationError::DetailLookupFailed("unused".into()))
        }
    }

    #[tokio::test]
    async fn denied_suggestions_print_no_matches() {
        let places = Arc::new(DeniedPlaces::default());
        let suggestions =
            query_suggestions(Arc::clone(&places) as Arc<dyn PlacesPort>, "Paulista", None).await;
        assert!(suggestions.is_empty());
        assert_eq!(places.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_suggestion_text_skips_service() {
        let places = Arc::new(DeniedPlaces::default());
        let suggestions =
            query_suggestions(Arc::clone(&places) as Arc<dyn PlacesPort>, "   ", None).await;
        assert!(suggestions.is_empty());
        assert_eq!(places.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn suggest_radius_defaults_to_config() {
        let cli = Cli::try_parse_from(["moveroute-cli", "suggest", "Rua"]).unwrap();
        let Commands::Suggest { radius, .. } = cli.command else {
            panic!("expected suggest command");
        };
        assert_eq!(radius, None);
    }

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn route_accepts_coordinate_and_address() {
        let cli = Cli::try_parse_from([
            "moveroute-cli",
            "route",
            "--from",
            "-23.55,-46.63",
            "--to",
            "Avenida Paulista, 1000",
        ])
        .unwrap();
        let Commands::Route { from, to } = cli.command else {
            panic!("expected route command");
        };
        assert!(matches!(from, EndpointArg::Coordinate(_)));
        assert_eq!(to, EndpointArg::Address("Avenida Paulista, 1000".to_string()));
    }
}
