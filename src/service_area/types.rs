//! Core types for the service-area subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates (and county, when known) of a resolved center city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterCoords {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub county: Option<String>,
}

/// A city matched by the radius scan, decorated with its distance from the
/// center point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCity {
    pub city: String,
    pub state: String,
    pub county: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub distance_miles: f64,
}

/// The cities a business serves in one county.
///
/// Group order inside a [`Resolution`] follows discovery order during the
/// nearest-first scan (the county of the closest city comes first), never
/// alphabetical order. City names within a group are sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAreaGroup {
    pub county: String,
    pub cities: Vec<String>,
}

/// The full result of a service-area resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub service_areas: Vec<ServiceAreaGroup>,
    /// The input city name, echoed back unnormalized.
    pub center_city: String,
    pub center_coords: CenterCoords,
    /// Total cities across all groups. The center city counts when it is
    /// present in the gazetteer.
    pub cities_found: usize,
}

/// Service-area resolution errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The (city, state) pair is absent from the gazetteer.
    CityNotFound { city: String, state: String },
    /// Radius was zero, negative, or not a finite number.
    InvalidRadius(f64),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CityNotFound { city, state } => write!(
                f,
                "City not found in database: {}, {} (check the spelling or add it to the gazetteer)",
                city, state
            ),
            Self::InvalidRadius(r) => write!(
                f,
                "Invalid radius: {} (must be a positive number of miles)",
                r
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
