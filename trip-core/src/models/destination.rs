use serde::{Deserialize, Serialize};

/// A known destination with map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}
