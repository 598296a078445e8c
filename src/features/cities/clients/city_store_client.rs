use async_trait::async_trait;

use crate::core::config::CityStoreConfig;
use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::NewCityVisit;
use crate::features::cities::models::{CityId, CityVisit};

/// The backend service of record for city visits
#[async_trait]
pub trait CityStore: Send + Sync {
    /// List every stored visit
    async fn list_cities(&self) -> Result<Vec<CityVisit>>;

    /// Fetch one visit by id
    async fn get_city(&self, id: &CityId) -> Result<CityVisit>;

    /// Store a draft; the returned visit carries the server-assigned id
    async fn create_city(&self, draft: &NewCityVisit) -> Result<CityVisit>;

    /// Delete a visit by id
    async fn delete_city(&self, id: &CityId) -> Result<()>;
}

/// JSON-over-HTTP client for the Remote City Store (`/cities` resource)
pub struct HttpCityStore {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCityStore {
    pub fn new(config: &CityStoreConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    fn cities_url(&self) -> String {
        format!("{}/cities", self.base_url)
    }

    fn city_url(&self, id: &CityId) -> String {
        format!(
            "{}/cities/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }

    /// Turn any non-2xx response into an error, logging the body
    async fn ensure_success(
        response: reqwest::Response,
        action: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("City store error while {}: HTTP {} - {}", action, status, body);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("City store: {}", action)));
        }

        Err(AppError::ExternalServiceError(format!(
            "City store error: HTTP {}",
            status
        )))
    }

    async fn send(request: reqwest::RequestBuilder, action: &str) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed {} in city store: {}", action, e);
            AppError::ExternalServiceError(format!("Failed {}: {}", action, e))
        })?;

        Self::ensure_success(response, action).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        action: &str,
    ) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse city store response ({}): {}", action, e);
            AppError::ExternalServiceError(format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl CityStore for HttpCityStore {
    async fn list_cities(&self) -> Result<Vec<CityVisit>> {
        let action = "listing cities";
        tracing::debug!("Fetching cities from {}", self.cities_url());

        let response = Self::send(self.http_client.get(self.cities_url()), action).await?;
        let cities = Self::parse::<Vec<CityVisit>>(response, action).await?;

        tracing::debug!("Fetched {} cities", cities.len());
        Ok(cities)
    }

    async fn get_city(&self, id: &CityId) -> Result<CityVisit> {
        let action = "fetching city";
        tracing::debug!("Fetching city {}", id);

        let response = Self::send(self.http_client.get(self.city_url(id)), action).await?;
        Self::parse::<CityVisit>(response, action).await
    }

    async fn create_city(&self, draft: &NewCityVisit) -> Result<CityVisit> {
        let action = "creating city";
        tracing::debug!("Creating city: {}", draft.city_name);

        let response = Self::send(
            self.http_client.post(self.cities_url()).json(draft),
            action,
        )
        .await?;
        let city = Self::parse::<CityVisit>(response, action).await?;

        tracing::info!("Created city {} ({})", city.id, city.city_name);
        Ok(city)
    }

    async fn delete_city(&self, id: &CityId) -> Result<()> {
        Self::send(self.http_client.delete(self.city_url(id)), "deleting city").await?;

        tracing::info!("Deleted city {}", id);
        Ok(())
    }
}
