mod geocoding_service;

pub use geocoding_service::{
    GeocodedPlace, GeocodingError, GeocodingService, ReverseGeocodeResponse,
};
