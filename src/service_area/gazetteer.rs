//! The city gazetteer: bundled fallback dataset plus JSON file loading.
//!
//! The hosting process loads the gazetteer once at startup and hands a
//! shared reference into every resolver call. The resolver never loads,
//! caches, or refreshes dataset content on its own, so the snapshot stays
//! immutable for the lifetime of each call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// One gazetteer row: a city with coordinates and administrative metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    /// 2-letter uppercase state code.
    pub state: String,
    /// County name; absent in some source rows (independent cities).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Errors while loading a gazetteer file.
#[derive(Debug)]
pub enum GazetteerError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for GazetteerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot read gazetteer file: {}", e),
            Self::Parse(e) => write!(f, "Invalid gazetteer JSON: {}", e),
        }
    }
}

impl std::error::Error for GazetteerError {}

/// An immutable snapshot of city records.
#[derive(Debug)]
pub struct Gazetteer {
    records: Vec<CityRecord>,
}

impl Gazetteer {
    /// Wrap an already-loaded record list (injection point for hosts and tests).
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        Self { records }
    }

    /// Load a JSON gazetteer file: an array of `{city, state, county, lat, lng}`.
    ///
    /// No content validation is performed; duplicate (city, state) pairs and
    /// missing counties are tolerated and handled permissively downstream.
    pub fn from_json_file(path: &Path) -> Result<Self, GazetteerError> {
        let data = fs::read_to_string(path).map_err(GazetteerError::Io)?;
        let records: Vec<CityRecord> =
            serde_json::from_str(&data).map_err(GazetteerError::Parse)?;
        Ok(Self { records })
    }

    /// The compiled-in fallback dataset of well-known US cities.
    pub fn builtin() -> Self {
        let records = BUILTIN_CITIES
            .iter()
            .map(|row| CityRecord {
                city: row.city.to_string(),
                state: row.state.to_string(),
                county: if row.county.is_empty() {
                    None
                } else {
                    Some(row.county.to_string())
                },
                lat: row.lat,
                lng: row.lng,
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinRow {
    city: &'static str,
    state: &'static str,
    county: &'static str, // "" for independent cities with no county
    lat: f64,
    lng: f64,
}

const BUILTIN_CITIES: &[BuiltinRow] = &[
    // Central Illinois
    BuiltinRow { city: "Springfield", state: "IL", county: "Sangamon", lat: 39.7817, lng: -89.6501 },
    BuiltinRow { city: "Chatham", state: "IL", county: "Sangamon", lat: 39.6731, lng: -89.7026 },
    BuiltinRow { city: "Rochester", state: "IL", county: "Sangamon", lat: 39.7492, lng: -89.5315 },
    BuiltinRow { city: "Sherman", state: "IL", county: "Sangamon", lat: 39.8934, lng: -89.6048 },
    BuiltinRow { city: "Petersburg", state: "IL", county: "Menard", lat: 40.0117, lng: -89.8481 },
    BuiltinRow { city: "Taylorville", state: "IL", county: "Christian", lat: 39.5489, lng: -89.2945 },
    BuiltinRow { city: "Lincoln", state: "IL", county: "Logan", lat: 40.1484, lng: -89.3648 },
    BuiltinRow { city: "Jacksonville", state: "IL", county: "Morgan", lat: 39.7339, lng: -90.2290 },
    BuiltinRow { city: "Decatur", state: "IL", county: "Macon", lat: 39.8403, lng: -88.9548 },
    BuiltinRow { city: "Bloomington", state: "IL", county: "McLean", lat: 40.4842, lng: -88.9937 },
    BuiltinRow { city: "Champaign", state: "IL", county: "Champaign", lat: 40.1164, lng: -88.2434 },
    BuiltinRow { city: "Peoria", state: "IL", county: "Peoria", lat: 40.6936, lng: -89.5890 },
    // Chicagoland
    BuiltinRow { city: "Chicago", state: "IL", county: "Cook", lat: 41.8781, lng: -87.6298 },
    BuiltinRow { city: "Evanston", state: "IL", county: "Cook", lat: 42.0451, lng: -87.6877 },
    BuiltinRow { city: "Naperville", state: "IL", county: "DuPage", lat: 41.7508, lng: -88.1535 },
    BuiltinRow { city: "Aurora", state: "IL", county: "Kane", lat: 41.7606, lng: -88.3201 },
    BuiltinRow { city: "Joliet", state: "IL", county: "Will", lat: 41.5250, lng: -88.0817 },
    // Southwest Missouri
    BuiltinRow { city: "Springfield", state: "MO", county: "Greene", lat: 37.2090, lng: -93.2923 },
    BuiltinRow { city: "Republic", state: "MO", county: "Greene", lat: 37.1201, lng: -93.4802 },
    BuiltinRow { city: "Nixa", state: "MO", county: "Christian", lat: 37.0434, lng: -93.2944 },
    BuiltinRow { city: "Ozark", state: "MO", county: "Christian", lat: 37.0209, lng: -93.2060 },
    BuiltinRow { city: "Branson", state: "MO", county: "Taney", lat: 36.6437, lng: -93.2185 },
    BuiltinRow { city: "St. Louis", state: "MO", county: "", lat: 38.6270, lng: -90.1994 },
    BuiltinRow { city: "Kansas City", state: "MO", county: "Jackson", lat: 39.0997, lng: -94.5786 },
    BuiltinRow { city: "Columbia", state: "MO", county: "Boone", lat: 38.9517, lng: -92.3341 },
    // Dallas-Fort Worth
    BuiltinRow { city: "Dallas", state: "TX", county: "Dallas", lat: 32.7767, lng: -96.7970 },
    BuiltinRow { city: "Irving", state: "TX", county: "Dallas", lat: 32.8140, lng: -96.9489 },
    BuiltinRow { city: "Garland", state: "TX", county: "Dallas", lat: 32.9126, lng: -96.6389 },
    BuiltinRow { city: "Fort Worth", state: "TX", county: "Tarrant", lat: 32.7555, lng: -97.3308 },
    BuiltinRow { city: "Arlington", state: "TX", county: "Tarrant", lat: 32.7357, lng: -97.1081 },
    BuiltinRow { city: "Plano", state: "TX", county: "Collin", lat: 33.0198, lng: -96.6989 },
    BuiltinRow { city: "Houston", state: "TX", county: "Harris", lat: 29.7604, lng: -95.3698 },
    BuiltinRow { city: "Austin", state: "TX", county: "Travis", lat: 30.2672, lng: -97.7431 },
    // Other metros
    BuiltinRow { city: "Phoenix", state: "AZ", county: "Maricopa", lat: 33.4484, lng: -112.0740 },
    BuiltinRow { city: "Mesa", state: "AZ", county: "Maricopa", lat: 33.4152, lng: -111.8315 },
    BuiltinRow { city: "Denver", state: "CO", county: "Denver", lat: 39.7392, lng: -104.9903 },
    BuiltinRow { city: "New York", state: "NY", county: "New York", lat: 40.7128, lng: -74.0060 },
    BuiltinRow { city: "Los Angeles", state: "CA", county: "Los Angeles", lat: 34.0522, lng: -118.2437 },
    BuiltinRow { city: "Carson City", state: "NV", county: "", lat: 39.1638, lng: -119.7674 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_nonempty() {
        let gaz = Gazetteer::builtin();
        assert!(gaz.len() > 30);
        assert!(!gaz.is_empty());
    }

    #[test]
    fn test_builtin_empty_county_maps_to_none() {
        let gaz = Gazetteer::builtin();
        let st_louis = gaz
            .records()
            .iter()
            .find(|r| r.city == "St. Louis")
            .unwrap();
        assert!(st_louis.county.is_none());
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        let json = r#"[
            {"city": "Springfield", "state": "IL", "county": "Sangamon", "lat": 39.80, "lng": -89.64},
            {"city": "Decatur", "state": "IL", "county": "Macon", "lat": 39.84, "lng": -88.95}
        ]"#;
        fs::write(&path, json).unwrap();

        let gaz = Gazetteer::from_json_file(&path).unwrap();
        assert_eq!(gaz.len(), 2);
        assert_eq!(gaz.records()[0].city, "Springfield");
        assert_eq!(gaz.records()[1].county.as_deref(), Some("Macon"));
    }

    #[test]
    fn test_from_json_file_missing_county() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        let json = r#"[{"city": "St. Louis", "state": "MO", "lat": 38.63, "lng": -90.20}]"#;
        fs::write(&path, json).unwrap();

        let gaz = Gazetteer::from_json_file(&path).unwrap();
        assert!(gaz.records()[0].county.is_none());
    }

    #[test]
    fn test_from_json_file_not_found() {
        let err = Gazetteer::from_json_file(Path::new("/nonexistent/cities.json")).unwrap_err();
        assert!(matches!(err, GazetteerError::Io(_)));
    }

    #[test]
    fn test_from_json_file_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, "{not json").unwrap();

        let err = Gazetteer::from_json_file(&path).unwrap_err();
        assert!(matches!(err, GazetteerError::Parse(_)));
    }
}
