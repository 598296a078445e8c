//! City collection state and its transition function.
//!
//! Every change to the collection goes through [`reduce`], which takes the
//! previous state and one [`CitiesAction`] and returns the next state. The
//! function does no I/O; `CitiesService` decides which action a settled
//! request turns into.

use crate::features::cities::error::CitiesError;
use crate::features::cities::models::{CityId, CityVisit};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitiesState {
    pub cities: Vec<CityVisit>,
    pub is_loading: bool,
    pub current_city: Option<CityVisit>,
    pub error: Option<CitiesError>,
    in_flight: usize,
}

impl CitiesState {
    /// User-facing error text, empty when there is none
    pub fn error_message(&self) -> &'static str {
        self.error.map(|e| e.message()).unwrap_or("")
    }

    pub fn current_city_id(&self) -> Option<&CityId> {
        self.current_city.as_ref().map(|c| &c.id)
    }

    pub fn is_current(&self, id: &CityId) -> bool {
        self.current_city_id() == Some(id)
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_loading = self.in_flight > 0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CitiesAction {
    /// A request was issued
    Loading,
    CitiesLoaded(Vec<CityVisit>),
    CityLoaded(CityVisit),
    /// `select` is false when a newer selection request superseded this one
    CityCreated { city: CityVisit, select: bool },
    CityDeleted(CityId),
    Rejected(CitiesError),
    /// A request settled but its result is no longer wanted
    Settled,
}

impl CitiesAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CitiesAction::Loading => "loading",
            CitiesAction::CitiesLoaded(_) => "cities/loaded",
            CitiesAction::CityLoaded(_) => "city/loaded",
            CitiesAction::CityCreated { .. } => "city/created",
            CitiesAction::CityDeleted(_) => "city/deleted",
            CitiesAction::Rejected(_) => "rejected",
            CitiesAction::Settled => "settled",
        }
    }
}

pub fn reduce(mut state: CitiesState, action: CitiesAction) -> CitiesState {
    match action {
        CitiesAction::Loading => {
            state.in_flight += 1;
            state.is_loading = true;
        }
        CitiesAction::CitiesLoaded(cities) => {
            state.settle();
            state.cities = cities;
            state.error = None;
        }
        CitiesAction::CityLoaded(city) => {
            state.settle();
            state.current_city = Some(city);
            state.error = None;
        }
        CitiesAction::CityCreated { city, select } => {
            state.settle();
            if select {
                state.current_city = Some(city.clone());
            }
            state.cities.push(city);
            state.error = None;
        }
        CitiesAction::CityDeleted(id) => {
            state.settle();
            state.cities.retain(|city| city.id != id);
            if state.is_current(&id) {
                state.current_city = None;
            }
            state.error = None;
        }
        CitiesAction::Rejected(error) => {
            state.settle();
            state.error = Some(error);
        }
        CitiesAction::Settled => state.settle(),
    }

    state
}
