//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use domain::Coordinate;

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lng) = s.split_once(',').ok_or("expected lat,lng")?;
    let lat: f64 = lat.trim().parse().map_err(|_| "invalid latitude")?;
    let lng: f64 = lng.trim().parse().map_err(|_| "invalid longitude")?;
    Coordinate::new(lat, lng).map_err(|e| e.to_string())
}

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "moveroute-cli")]
#[command(author, version, about = "MoveRoute address and route CLI", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Suggest {
        text: String,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        near: Option<Coordinate>,
        #[arg(long)]
        radius: Option<u32>,
    },
    Reverse {
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        coordinate: Coordinate,
    },
    Geocode {
        address: String,
    },
    Route {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },
    Session,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_suggest_command() {
    let cli = parse_args(&["moveroute-cli", "suggest", "Avenida Paul"]).unwrap();
    if let Commands::Suggest { text, near, radius } = cli.command {
        assert_eq!(text, "Avenida Paul");
        assert!(near.is_none());
        assert_eq!(radius, None);
    } else {
        panic!("Expected Suggest command");
    }
}

#[test]
fn cli_parses_suggest_with_bias() {
    let cli = parse_args(&[
        "moveroute-cli",
        "suggest",
        "Rua Augusta",
        "--near",
        "-23.55,-46.63",
        "--radius",
        "5000",
    ])
    .unwrap();
    if let Commands::Suggest { near, radius, .. } = cli.command {
        let near = near.unwrap();
        assert!((near.lat() + 23.55).abs() < 1e-9);
        assert_eq!(radius, Some(5000));
    } else {
        panic!("Expected Suggest command");
    }
}

#[test]
fn cli_parses_reverse_with_negative_coordinate() {
    let cli = parse_args(&["moveroute-cli", "reverse", "-23.55,-46.63"]).unwrap();
    if let Commands::Reverse { coordinate } = cli.command {
        assert!((coordinate.lng() + 46.63).abs() < 1e-9);
    } else {
        panic!("Expected Reverse command");
    }
}

#[test]
fn cli_rejects_out_of_range_reverse() {
    assert!(parse_args(&["moveroute-cli", "reverse", "123,0"]).is_err());
}

#[test]
fn cli_parses_geocode_command() {
    let cli = parse_args(&["moveroute-cli", "geocode", "Praça da Sé"]).unwrap();
    if let Commands::Geocode { address } = cli.command {
        assert_eq!(address, "Praça da Sé");
    } else {
        panic!("Expected Geocode command");
    }
}

#[test]
fn cli_parses_route_command() {
    let cli = parse_args(&[
        "moveroute-cli",
        "route",
        "--from",
        "-23.55,-46.63",
        "--to",
        "Avenida Paulista, 1000",
    ])
    .unwrap();
    if let Commands::Route { from, to } = cli.command {
        assert_eq!(from, "-23.55,-46.63");
        assert_eq!(to, "Avenida Paulista, 1000");
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_route_requires_both_endpoints() {
    assert!(parse_args(&["moveroute-cli", "route", "--from", "Sé"]).is_err());
}

#[test]
fn cli_parses_session_command() {
    let cli = parse_args(&["moveroute-cli", "session"]).unwrap();
    assert!(matches!(cli.command, Commands::Session));
}

#[test]
fn cli_verbose_flag_counts() {
    let cli = parse_args(&["moveroute-cli", "-vvv", "session"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_parses_config_path() {
    let cli = parse_args(&["moveroute-cli", "--config", "/etc/moveroute.toml", "session"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/moveroute.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["moveroute-cli"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["moveroute-cli", "chat"]).is_err());
}
