use crate::service_area::ServiceAreaResolver;

/// Shared server state. The resolver is read-only over an immutable
/// gazetteer snapshot, so concurrent requests need no locking.
pub struct AppState {
    pub resolver: ServiceAreaResolver,
}
