pub mod auth;
pub mod cities;
pub mod geocoding;
pub mod geolocation;
pub mod navigation;
