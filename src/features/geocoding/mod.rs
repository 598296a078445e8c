//! Reverse geocoding for the city form.
//!
//! A map click yields a position; the lookup turns it into a city name,
//! country and flag so the form starts prefilled.

pub mod services;

pub use services::{GeocodedPlace, GeocodingError, GeocodingService};
