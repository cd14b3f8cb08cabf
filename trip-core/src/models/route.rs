use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Plane,
    Train,
    Bus,
    Walking,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Plane => "plane",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Walking => "walking",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "car" => Some(Self::Car),
            "plane" => Some(Self::Plane),
            "train" => Some(Self::Train),
            "bus" => Some(Self::Bus),
            "walking" => Some(Self::Walking),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// A candidate route between the origin and destination of a trip.
///
/// Routes come from static candidate sets; the bookmark flag is a local,
/// non-persisted toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    pub name: String,
    pub transport_mode: TransportMode,
    pub duration_minutes: u32,
    /// Display string (e.g. "245 km"); never used in computation.
    pub distance: String,
    pub cost: Decimal,
    pub traffic_level: TrafficLevel,
    pub rating: Option<Decimal>,
    pub bookmarked: bool,
}

impl Route {
    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
    }
}
