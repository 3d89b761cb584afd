//! Service-area resolver: center lookup, radius scan, county grouping.
//!
//! Pure, synchronous, and deterministic. The gazetteer is an immutable
//! snapshot injected at construction; every call builds fresh output, so
//! concurrent calls over a shared resolver need no locking.

use std::cmp::Ordering;

use super::gazetteer::Gazetteer;
use super::types::{CenterCoords, RankedCity, Resolution, ResolveError, ServiceAreaGroup};
use crate::geo;

/// Cap on cities returned by the composition path.
pub const MAX_SERVICE_CITIES: usize = 30;

/// Group label for records with no county in the source data.
pub const OTHER_COUNTY: &str = "Other";

/// The service-area resolver.
pub struct ServiceAreaResolver {
    gazetteer: Gazetteer,
}

impl ServiceAreaResolver {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Look up the coordinates of a city.
    ///
    /// Exact match only: case-insensitive, whitespace-trimmed city name and
    /// state code. The first matching record wins in dataset order; no fuzzy
    /// or partial matching, no disambiguation across duplicate entries.
    pub fn city_coordinates(&self, city: &str, state: &str) -> Option<CenterCoords> {
        let city_q = city.trim().to_lowercase();
        let state_q = state.trim().to_uppercase();

        self.gazetteer
            .records()
            .iter()
            .find(|r| {
                r.city.trim().to_lowercase() == city_q && r.state.trim().to_uppercase() == state_q
            })
            .map(|r| CenterCoords {
                lat: r.lat,
                lng: r.lng,
                county: r.county.clone(),
            })
    }

    /// All same-state cities within `radius_miles` of the center point,
    /// nearest first, truncated to `max_cities`.
    ///
    /// The sort is stable: ties at equal distance keep dataset order. A NaN
    /// distance never satisfies the radius test, so records with non-finite
    /// coordinates drop out silently. The center city itself is not filtered;
    /// if it is in the gazetteer it ranks first at distance zero.
    pub fn cities_within_radius(
        &self,
        lat: f64,
        lng: f64,
        radius_miles: f64,
        state: &str,
        max_cities: usize,
    ) -> Vec<RankedCity> {
        let state_q = state.trim().to_uppercase();

        let mut ranked: Vec<RankedCity> = self
            .gazetteer
            .records()
            .iter()
            .filter(|r| r.state.trim().to_uppercase() == state_q)
            .filter_map(|r| {
                let distance = geo::haversine_miles(lat, lng, r.lat, r.lng);
                (distance <= radius_miles).then(|| RankedCity {
                    city: r.city.clone(),
                    state: r.state.clone(),
                    county: r.county.clone(),
                    lat: r.lat,
                    lng: r.lng,
                    distance_miles: distance,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.distance_miles
                .partial_cmp(&b.distance_miles)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(max_cities);
        ranked
    }

    /// Group ranked cities by county, preserving first-seen county order,
    /// then sort each group's city names lexicographically (byte order,
    /// capitals before lowercase).
    ///
    /// Missing counties collapse into one group labeled [`OTHER_COUNTY`].
    /// No deduplication: a city listed twice for the same county appears
    /// twice in that group.
    pub fn group_by_county(ranked: &[RankedCity]) -> Vec<ServiceAreaGroup> {
        let mut groups: Vec<ServiceAreaGroup> = Vec::new();

        for rc in ranked {
            let county = rc
                .county
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(OTHER_COUNTY);

            match groups.iter_mut().find(|g| g.county == county) {
                Some(group) => group.cities.push(rc.city.clone()),
                None => groups.push(ServiceAreaGroup {
                    county: county.to_string(),
                    cities: vec![rc.city.clone()],
                }),
            }
        }

        for group in &mut groups {
            group.cities.sort();
        }
        groups
    }

    /// Resolve the full service area for a city: center lookup, capped
    /// nearest-first radius scan, county grouping.
    ///
    /// The center city, when present in the gazetteer, is included in its own
    /// service area at distance zero and counts toward `cities_found`.
    pub fn resolve(
        &self,
        city: &str,
        state: &str,
        radius_miles: f64,
    ) -> Result<Resolution, ResolveError> {
        if !radius_miles.is_finite() || radius_miles <= 0.0 {
            return Err(ResolveError::InvalidRadius(radius_miles));
        }

        let center = self
            .city_coordinates(city, state)
            .ok_or_else(|| ResolveError::CityNotFound {
                city: city.to_string(),
                state: state.to_string(),
            })?;

        let ranked = self.cities_within_radius(
            center.lat,
            center.lng,
            radius_miles,
            state,
            MAX_SERVICE_CITIES,
        );
        let service_areas = Self::group_by_county(&ranked);

        Ok(Resolution {
            service_areas,
            center_city: city.to_string(),
            center_coords: center,
            cities_found: ranked.len(),
        })
    }
}
