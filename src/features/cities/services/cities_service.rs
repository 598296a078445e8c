use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use validator::Validate;

use crate::features::cities::clients::CityStore;
use crate::features::cities::dtos::NewCityVisit;
use crate::features::cities::error::CitiesError;
use crate::features::cities::models::{countries_from, CityId, Country};
use crate::features::cities::state::{reduce, CitiesAction, CitiesState};

/// Owns the in-memory city collection and keeps it in step with the store
///
/// One instance per application session, shared as `Arc<CitiesService>`.
/// Operations never return errors: failures land in `CitiesState::error`.
pub struct CitiesService {
    store: Arc<dyn CityStore>,
    state: watch::Sender<CitiesState>,
    active: AtomicBool,
    activated: AtomicBool,
    /// Ticket counter for requests that write `current_city`
    selection_seq: AtomicU64,
}

impl CitiesService {
    pub fn new(store: Arc<dyn CityStore>) -> Self {
        let (state, _) = watch::channel(CitiesState::default());

        Self {
            store,
            state,
            active: AtomicBool::new(true),
            activated: AtomicBool::new(false),
            selection_seq: AtomicU64::new(0),
        }
    }

    /// Start the initial load; only the first call has any effect
    pub fn activate(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.activated.swap(true, Ordering::SeqCst) {
            return None;
        }

        tracing::debug!("Cities container activated");
        let service = Arc::clone(self);
        Some(tokio::spawn(async move { service.load_all().await }))
    }

    /// Tear the container down; responses that arrive later are dropped
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
        tracing::debug!("Cities container deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> CitiesState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CitiesState> {
        self.state.subscribe()
    }

    /// Distinct countries among the loaded cities
    pub fn countries(&self) -> Vec<Country> {
        countries_from(&self.state.borrow().cities)
    }

    pub async fn load_all(&self) {
        self.dispatch(CitiesAction::Loading);

        match self.store.list_cities().await {
            Ok(cities) => self.dispatch(CitiesAction::CitiesLoaded(cities)),
            Err(e) => {
                tracing::error!("Failed to load cities: {}", e);
                self.dispatch(CitiesAction::Rejected(CitiesError::LoadAllFailed));
            }
        }
    }

    /// Select a city, fetching it unless it is already the current one
    pub async fn get_city(&self, id: &CityId) {
        let ticket = self.next_selection();

        let already_current = self.state.borrow().is_current(id);
        if already_current {
            tracing::debug!("City {} already selected, skipping fetch", id);
            return;
        }

        self.dispatch(CitiesAction::Loading);

        let result = self.store.get_city(id).await;

        if !self.is_latest_selection(ticket) {
            tracing::debug!("Discarding superseded response for city {}", id);
            self.dispatch(CitiesAction::Settled);
            return;
        }

        match result {
            Ok(city) => self.dispatch(CitiesAction::CityLoaded(city)),
            Err(e) => {
                tracing::error!("Failed to load city {}: {}", id, e);
                self.dispatch(CitiesAction::Rejected(CitiesError::LoadOneFailed));
            }
        }
    }

    pub async fn create_city(&self, draft: NewCityVisit) {
        self.dispatch(CitiesAction::Loading);

        if let Err(e) = draft.validate() {
            tracing::warn!("Refusing to create city with invalid draft: {}", e);
            self.dispatch(CitiesAction::Rejected(CitiesError::CreateFailed));
            return;
        }

        let ticket = self.next_selection();

        match self.store.create_city(&draft).await {
            Ok(city) => {
                let select = self.is_latest_selection(ticket);
                self.dispatch(CitiesAction::CityCreated { city, select });
            }
            Err(e) => {
                tracing::error!("Failed to create city {}: {}", draft.city_name, e);
                self.dispatch(CitiesAction::Rejected(CitiesError::CreateFailed));
            }
        }
    }

    pub async fn delete_city(&self, id: &CityId) {
        self.dispatch(CitiesAction::Loading);

        match self.store.delete_city(id).await {
            Ok(()) => self.dispatch(CitiesAction::CityDeleted(id.clone())),
            Err(e) => {
                tracing::error!("Failed to delete city {}: {}", id, e);
                self.dispatch(CitiesAction::Rejected(CitiesError::DeleteFailed));
            }
        }
    }

    fn dispatch(&self, action: CitiesAction) {
        if !self.is_active() {
            tracing::debug!(
                "Cities container inactive, dropping '{}' action",
                action.kind()
            );
            return;
        }

        tracing::trace!("Dispatching '{}'", action.kind());
        self.state
            .send_modify(|state| *state = reduce(std::mem::take(state), action));
    }

    fn next_selection(&self) -> u64 {
        self.selection_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest_selection(&self, ticket: u64) -> bool {
        self.selection_seq.load(Ordering::SeqCst) == ticket
    }
}
