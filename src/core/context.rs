use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::features::auth::{guard_route, AuthService, RouteDecision};
use crate::features::cities::clients::{CityStore, HttpCityStore};
use crate::features::cities::CitiesService;
use crate::features::geocoding::GeocodingService;
use crate::features::navigation::AppRoute;

/// Services for one application session
///
/// Built once at startup and handed to consumers by `Arc`.
pub struct AppContext {
    pub config: Config,
    pub auth: Arc<AuthService>,
    pub cities: Arc<CitiesService>,
    pub geocoding: Arc<GeocodingService>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn CityStore> = Arc::new(HttpCityStore::new(&config.city_store));
        tracing::info!("City store client initialized: {}", config.city_store.base_url);

        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<dyn CityStore>) -> Result<Self> {
        let geocoding = Arc::new(GeocodingService::new(&config.geocoding)?);
        tracing::info!("Geocoding service initialized: {}", config.geocoding.base_url);

        Ok(Self {
            config,
            auth: Arc::new(AuthService::new()),
            cities: Arc::new(CitiesService::new(store)),
            geocoding,
        })
    }

    /// Resolve a location through the auth guard and run the route's data
    /// loading (opening a city detail selects that city)
    pub async fn visit(&self, location: &str) -> RouteDecision {
        let decision = guard_route(&self.auth, AppRoute::parse(location));

        if let RouteDecision::Render(AppRoute::City { id, .. }) = &decision {
            self.cities.get_city(id).await;
        }

        decision
    }
}
