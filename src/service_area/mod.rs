//! Service-area subsystem: the gazetteer dataset, the radius resolver, and
//! the persisted output shape consumed by the rest of the platform.

pub mod gazetteer;
pub mod persisted;
pub mod resolver;
pub mod types;

pub use gazetteer::{CityRecord, Gazetteer, GazetteerError};
pub use persisted::{CityEntry, EnrichedCity, PersistedServiceArea};
pub use resolver::{ServiceAreaResolver, MAX_SERVICE_CITIES, OTHER_COUNTY};
pub use types::{CenterCoords, RankedCity, Resolution, ResolveError, ServiceAreaGroup};
