//! Endpoint role of a move request

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Which end of the move a place belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    /// Where the move starts
    Origin,
    /// Where the move ends
    Destination,
}

impl EndpointRole {
    /// Both roles, origin first
    pub const ALL: [Self; 2] = [Self::Origin, Self::Destination];

    /// The other endpoint
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Origin => Self::Destination,
            Self::Destination => Self::Origin,
        }
    }

    /// Stable slot index (origin = 0, destination = 1)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Origin => 0,
            Self::Destination => 1,
        }
    }

    /// Default marker title when no address is known
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

impl FromStr for EndpointRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "origin" | "from" | "o" => Ok(Self::Origin),
            "destination" | "to" | "d" => Ok(Self::Destination),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_roles() {
        assert_eq!(EndpointRole::Origin.opposite(), EndpointRole::Destination);
        assert_eq!(EndpointRole::Destination.opposite(), EndpointRole::Origin);
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(EndpointRole::Origin.index(), 0);
        assert_eq!(EndpointRole::Destination.index(), 1);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("from".parse::<EndpointRole>().unwrap(), EndpointRole::Origin);
        assert_eq!(" Destination ".parse::<EndpointRole>().unwrap(), EndpointRole::Destination);
        assert!("via".parse::<EndpointRole>().is_err());
    }

    #[test]
    fn display_and_serde_agree() {
        let json = serde_json::to_string(&EndpointRole::Origin).unwrap();
        assert_eq!(json, "\"origin\"");
        assert_eq!(EndpointRole::Origin.to_string(), "origin");
    }
}
