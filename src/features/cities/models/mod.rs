mod city;
mod country;

pub use city::{CityId, CityVisit, Position};
pub use country::{countries_from, Country};
