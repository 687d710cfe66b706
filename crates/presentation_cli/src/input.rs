//! Parsing of endpoint arguments typed on the command line

use std::str::FromStr;

use domain::Coordinate;

/// Parse `"lat,lng"` into a validated coordinate
pub fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got {s:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude {:?}", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude {:?}", lng.trim()))?;
    Coordinate::new(lat, lng).map_err(|e| e.to_string())
}

/// An endpoint given either as a coordinate or as free text
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointArg {
    Coordinate(Coordinate),
    Address(String),
}

impl FromStr for EndpointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(coordinate) = parse_coordinate(s) {
            return Ok(Self::Coordinate(coordinate));
        }
        let text = s.trim();
        if text.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        Ok(Self::Address(text.to_string()))
    }
}
