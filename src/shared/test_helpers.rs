//! Fixtures shared by the unit tests: sample visits, an in-memory city store
//! with call recording, and an in-process HTTP city store.

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{TimeZone, Utc};
use fake::faker::address::en::{CityName, CountryName};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::core::error::{AppError, Result};
use crate::features::cities::clients::CityStore;
use crate::features::cities::dtos::NewCityVisit;
use crate::features::cities::models::{CityId, CityVisit, Position};

const SAMPLES: [(&str, &str, &str, f64, f64); 4] = [
    ("Lisbon", "Portugal", "🇵🇹", 38.727, -9.140),
    ("Madrid", "Spain", "🇪🇸", 40.464, -3.683),
    ("Berlin", "Germany", "🇩🇪", 52.530, 13.383),
    ("Porto", "Portugal", "🇵🇹", 41.157, -8.629),
];

/// Deterministic visit for the given id
pub fn sample_city(id: u64) -> CityVisit {
    let (city_name, country, emoji, lat, lng) = SAMPLES[(id as usize) % SAMPLES.len()];

    CityVisit {
        id: CityId::Number(id),
        city_name: city_name.to_string(),
        country: country.to_string(),
        emoji: emoji.to_string(),
        date: Utc.with_ymd_and_hms(2027, 10, 31, 15, 59, 59).unwrap(),
        notes: format!("Visit #{}", id),
        position: Position::new(lat, lng),
    }
}

/// Draft with generated names and notes
pub fn sample_draft() -> NewCityVisit {
    NewCityVisit {
        city_name: CityName().fake(),
        country: CountryName().fake(),
        emoji: "🏳".to_string(),
        date: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
        notes: Sentence(3..8).fake(),
        position: Position::new(38.7, -9.1),
    }
}

/// Attach a store-assigned id to a draft, as the store does on create
pub fn city_from_draft(id: CityId, draft: NewCityVisit) -> CityVisit {
    CityVisit {
        id,
        city_name: draft.city_name,
        country: draft.country,
        emoji: draft.emoji,
        date: draft.date,
        notes: draft.notes,
        position: draft.position,
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Get(CityId),
    Create(String),
    Delete(CityId),
}

/// `CityStore` backed by a vector, recording every call
///
/// `hold_get` parks requests for one id until the returned `Notify` fires,
/// which lets tests choose the order in which responses settle.
#[derive(Default)]
pub struct InMemoryCityStore {
    cities: Mutex<Vec<CityVisit>>,
    next_id: AtomicU64,
    failing: AtomicBool,
    calls: Mutex<Vec<StoreCall>>,
    held: Mutex<HashMap<CityId, Arc<Notify>>>,
}

impl InMemoryCityStore {
    pub fn with_cities(cities: Vec<CityVisit>) -> Self {
        let next_id = cities
            .iter()
            .filter_map(|c| match c.id {
                CityId::Number(n) => Some(n),
                CityId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            cities: Mutex::new(cities),
            next_id: AtomicU64::new(next_id),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Get(_)))
            .count()
    }

    pub fn hold_get(&self, id: CityId) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.held.lock().unwrap().insert(id, Arc::clone(&gate));
        gate
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CityStore for InMemoryCityStore {
    async fn list_cities(&self) -> Result<Vec<CityVisit>> {
        self.record(StoreCall::List);
        self.check()?;
        Ok(self.cities.lock().unwrap().clone())
    }

    async fn get_city(&self, id: &CityId) -> Result<CityVisit> {
        self.record(StoreCall::Get(id.clone()));

        let gate = self.held.lock().unwrap().get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.check()?;
        self.cities
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("city {}", id)))
    }

    async fn create_city(&self, draft: &NewCityVisit) -> Result<CityVisit> {
        self.record(StoreCall::Create(draft.city_name.clone()));
        self.check()?;

        let id = CityId::Number(self.next_id.fetch_add(1, Ordering::SeqCst));
        let city = city_from_draft(id, draft.clone());
        self.cities.lock().unwrap().push(city.clone());
        Ok(city)
    }

    async fn delete_city(&self, id: &CityId) -> Result<()> {
        self.record(StoreCall::Delete(id.clone()));
        self.check()?;
        self.cities.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }
}

// =============================================================================
// HTTP STORE
// =============================================================================

#[derive(Clone)]
struct FakeStoreState {
    cities: Arc<Mutex<Vec<CityVisit>>>,
    next_id: Arc<AtomicU64>,
}

pub struct FakeCityStoreServer {
    pub base_url: String,
    pub cities: Arc<Mutex<Vec<CityVisit>>>,
}

/// Serve `/cities` on an ephemeral loopback port, json-server style
pub async fn spawn_fake_city_store(seed: Vec<CityVisit>) -> FakeCityStoreServer {
    let next_id = InMemoryCityStore::with_cities(seed.clone())
        .next_id
        .load(Ordering::SeqCst);

    let state = FakeStoreState {
        cities: Arc::new(Mutex::new(seed)),
        next_id: Arc::new(AtomicU64::new(next_id)),
    };

    let app = Router::new()
        .route("/cities", get(list_cities).post(create_city))
        .route("/cities/{id}", get(get_city).delete(delete_city))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCityStoreServer {
        base_url: format!("http://{}", addr),
        cities: state.cities,
    }
}

async fn list_cities(State(state): State<FakeStoreState>) -> Json<Vec<CityVisit>> {
    Json(state.cities.lock().unwrap().clone())
}

async fn get_city(
    State(state): State<FakeStoreState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<CityVisit>, StatusCode> {
    let id = CityId::from(id.as_str());
    let city = state
        .cities
        .lock()
        .unwrap()
        .iter()
        .find(|c| c.id == id)
        .cloned();

    city.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_city(
    State(state): State<FakeStoreState>,
    Json(draft): Json<NewCityVisit>,
) -> (StatusCode, Json<CityVisit>) {
    let id = CityId::Number(state.next_id.fetch_add(1, Ordering::SeqCst));
    let city = city_from_draft(id, draft);
    state.cities.lock().unwrap().push(city.clone());

    (StatusCode::CREATED, Json(city))
}

async fn delete_city(State(state): State<FakeStoreState>, Path(id): Path<String>) -> StatusCode {
    let id = CityId::from(id.as_str());
    let mut cities = state.cities.lock().unwrap();
    let before = cities.len();
    cities.retain(|c| c.id != id);

    if cities.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
