//! Great-circle distance on a spherical Earth.
//!
//! Uses the standard Haversine formula with an Earth radius of 3959 statute
//! miles. Spherical distance is within ~0.3% of the WGS84 ellipsoid value,
//! which is more than enough for city-to-city radius filtering.

use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3959.0;

/// Great-circle distance in miles between two (lat, lng) points in degrees.
///
/// Propagates NaN if any input is NaN; callers filtering with
/// `distance <= radius` drop such records automatically.
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1) * DEG;
    let dlng = (lng2 - lng1) * DEG;

    let a = (dlat / 2.0).sin().powi(2)
        + (lat1 * DEG).cos() * (lat2 * DEG).cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MI * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_distance() {
        assert_relative_eq!(haversine_miles(39.78, -89.65, 39.78, -89.65), 0.0);
    }

    #[test]
    fn test_springfield_to_decatur() {
        // Springfield, IL to Decatur, IL: roughly 37 miles great-circle.
        let d = haversine_miles(39.7817, -89.6501, 39.8403, -88.9548);
        assert!(d > 35.0 && d < 40.0, "got {}", d);
    }

    #[test]
    fn test_springfield_to_chicago() {
        // Well outside a typical 50-mile service radius.
        let d = haversine_miles(39.7817, -89.6501, 41.8781, -87.6298);
        assert!(d > 170.0 && d < 190.0, "got {}", d);
    }

    #[test]
    fn test_nyc_to_la() {
        let d = haversine_miles(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((d - 2445.0).abs() < 20.0, "got {}", d);
    }

    #[test]
    fn test_symmetric() {
        let a = haversine_miles(37.2090, -93.2923, 38.6270, -90.1994);
        let b = haversine_miles(38.6270, -90.1994, 37.2090, -93.2923);
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let d = haversine_miles(f64::NAN, 0.0, 10.0, 10.0);
        assert!(d.is_nan());
        // A NaN distance never passes a radius filter.
        assert!(!(d <= 1000.0));
    }
}
