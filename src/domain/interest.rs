//! Interest tag vocabulary
//!
//! The planning service understands a fixed set of interest tags. The set is
//! closed: free-form tags are not part of the request contract.

use serde::{Deserialize, Serialize};

/// An interest tag attached to a trip request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interest {
    Adventure,
    History,
    Architecture,
    Nature,
    Photography,
    Cultural,
    Food,
    Shopping,
    Relaxation,
    Beaches,
}

impl Interest {
    /// All tags the service understands, in display order
    pub const ALL: [Interest; 10] = [
        Interest::Adventure,
        Interest::History,
        Interest::Architecture,
        Interest::Nature,
        Interest::Photography,
        Interest::Cultural,
        Interest::Food,
        Interest::Shopping,
        Interest::Relaxation,
        Interest::Beaches,
    ];

    /// Wire/display name for the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::History => "History",
            Self::Architecture => "Architecture",
            Self::Nature => "Nature",
            Self::Photography => "Photography",
            Self::Cultural => "Cultural",
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Relaxation => "Relaxation",
            Self::Beaches => "Beaches",
        }
    }
}

impl std::str::FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "history" => Ok(Self::History),
            "architecture" => Ok(Self::Architecture),
            "nature" => Ok(Self::Nature),
            "photography" => Ok(Self::Photography),
            "cultural" => Ok(Self::Cultural),
            "food" => Ok(Self::Food),
            "shopping" => Ok(Self::Shopping),
            "relaxation" => Ok(Self::Relaxation),
            "beaches" => Ok(Self::Beaches),
            _ => Err(format!(
                "Unknown interest: {}. Use one of: {}",
                s,
                Interest::ALL.map(|i| i.as_str()).join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
