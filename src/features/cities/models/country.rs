use serde::{Deserialize, Serialize};

use crate::features::cities::models::CityVisit;

/// A visited country as listed in the countries view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country: String,
    pub emoji: String,
}

/// Distinct countries of the given visits, in first-visited order
pub fn countries_from(cities: &[CityVisit]) -> Vec<Country> {
    cities.iter().fold(Vec::new(), |mut countries, city| {
        if !countries.iter().any(|c: &Country| c.country == city.country) {
            countries.push(Country {
                country: city.country.clone(),
                emoji: city.emoji.clone(),
            });
        }
        countries
    })
}
