mod city_store_client;

pub use city_store_client::{CityStore, HttpCityStore};
