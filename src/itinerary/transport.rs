//! Local transport kinds and display glyphs
//!
//! The service describes transport options with a free-form `type` string.
//! Known kinds get a dedicated glyph; anything else falls back to a generic
//! transit stop symbol instead of failing.

use serde::{Serialize, Serializer};

/// Glyph shown for transport kinds not in the symbol table
pub const FALLBACK_GLYPH: &str = "🚏";

/// A local transport kind reported by the planning service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    Metro,
    Bus,
    Taxi,
    Bicycle,
    Walking,
    Train,
    Tram,
    Ferry,
    Scooter,
    Rideshare,
    /// Anything outside the known vocabulary, preserved verbatim
    Other(String),
}

impl TransportKind {
    /// Parse a wire `type` string; unknown values become [`TransportKind::Other`]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "metro" => Self::Metro,
            "bus" => Self::Bus,
            "taxi" => Self::Taxi,
            "bicycle" => Self::Bicycle,
            "walking" => Self::Walking,
            "train" => Self::Train,
            "tram" => Self::Tram,
            "ferry" => Self::Ferry,
            "scooter" => Self::Scooter,
            "rideshare" => Self::Rideshare,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire name for this kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Metro => "metro",
            Self::Bus => "bus",
            Self::Taxi => "taxi",
            Self::Bicycle => "bicycle",
            Self::Walking => "walking",
            Self::Train => "train",
            Self::Tram => "tram",
            Self::Ferry => "ferry",
            Self::Scooter => "scooter",
            Self::Rideshare => "rideshare",
            Self::Other(other) => other,
        }
    }

    /// Display glyph for this kind
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Metro => "🚇",
            Self::Bus => "🚌",
            Self::Taxi => "🚖",
            Self::Bicycle => "🚲",
            Self::Walking => "🚶‍♂️",
            Self::Train => "🚂",
            Self::Tram => "🚊",
            Self::Ferry => "⛴️",
            Self::Scooter => "🛴",
            Self::Rideshare => "🚗",
            Self::Other(_) => FALLBACK_GLYPH,
        }
    }
}

impl Default for TransportKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TransportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
