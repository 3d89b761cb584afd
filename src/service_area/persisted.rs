//! Persisted service-area shape consumed downstream.
//!
//! The platform stores one array of `{county, cities}` per company. Each
//! `cities` entry is either a plain city-name string (what the resolver
//! emits) or an enriched object added later by the content-generation
//! pipeline. Format detection looks at the first entry of a group's list,
//! matching how the admin endpoint distinguishes old from new records.

use serde::{Deserialize, Serialize};

use super::types::ServiceAreaGroup;

/// Per-city SEO fields layered on by the content-generation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCity {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[serde(default)]
    pub zip_codes: Vec<String>,
}

/// One entry of a persisted group's city list: a bare name or the enriched
/// object form. Serde untagged keeps both wire forms readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityEntry {
    Name(String),
    Enriched(EnrichedCity),
}

impl CityEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Enriched(city) => &city.name,
        }
    }
}

/// A persisted county group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedServiceArea {
    pub county: String,
    pub cities: Vec<CityEntry>,
}

impl PersistedServiceArea {
    /// True for the pre-enrichment format: plain city-name strings only.
    /// An empty group counts as plain.
    pub fn is_plain(&self) -> bool {
        matches!(self.cities.first(), Some(CityEntry::Name(_)) | None)
    }
}

impl From<ServiceAreaGroup> for PersistedServiceArea {
    fn from(group: ServiceAreaGroup) -> Self {
        Self {
            county: group.county,
            cities: group.cities.into_iter().map(CityEntry::Name).collect(),
        }
    }
}
