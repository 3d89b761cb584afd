//! Radiusmap — service-area geo-resolution engine.
//!
//! Given a US city, a 2-letter state code, and a radius in miles, finds
//! every other known city in the same state within that radius, grouped by
//! county in nearest-first discovery order. Backs the service-area
//! regeneration endpoint of a marketing-site platform and a small CLI.
//!
//! The gazetteer dataset is loaded once by the hosting process and injected
//! into the resolver; the core itself is pure and synchronous.

pub mod geo;
pub mod server;
pub mod service_area;
