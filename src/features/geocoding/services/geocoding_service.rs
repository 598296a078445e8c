use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::cities::models::Position;
use crate::shared::constants::MSG_NOT_A_CITY;
use crate::shared::flags;

/// BigDataCloud reverse-geocode-client response (fields we use)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub country_code: String,
}

impl ReverseGeocodeResponse {
    /// Get city, falling back to locality
    pub fn get_city(&self) -> String {
        [&self.city, &self.locality]
            .into_iter()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

/// Best guess of the place under a map click, used to prefill the city form
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub city_name: String,
    pub country: String,
    pub country_code: String,
    pub emoji: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("{}", MSG_NOT_A_CITY)]
    NotACity,

    #[error("Reverse geocoding failed: {0}")]
    RequestFailed(String),
}

/// Service for reverse geocoding map positions
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Look up the city and country at a position
    pub async fn reverse_geocode(
        &self,
        position: Position,
    ) -> std::result::Result<GeocodedPlace, GeocodingError> {
        let url = format!(
            "{}?latitude={}&longitude={}",
            self.base_url, position.lat, position.lng
        );

        tracing::debug!("Reverse geocoding ({}, {}) -> {}", position.lat, position.lng, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Reverse geocoding request failed: {:?}", e);
            GeocodingError::RequestFailed(e.to_string())
        })?;

        if !response.status().is_success() {
            tracing::warn!("Reverse geocoding returned status: {}", response.status());
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: ReverseGeocodeResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse reverse geocoding response: {:?}", e);
            GeocodingError::RequestFailed(e.to_string())
        })?;

        Self::to_place(body)
    }

    /// Convert a lookup response into a place; no country code means the click
    /// was not on a city (sea, poles, ...)
    pub fn to_place(
        response: ReverseGeocodeResponse,
    ) -> std::result::Result<GeocodedPlace, GeocodingError> {
        if response.country_code.is_empty() {
            return Err(GeocodingError::NotACity);
        }

        let emoji = flags::country_code_to_emoji(&response.country_code).unwrap_or_default();

        Ok(GeocodedPlace {
            city_name: response.get_city(),
            country: response.country_name,
            country_code: response.country_code,
            emoji,
        })
    }
}
