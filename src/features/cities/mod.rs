//! Visited cities.
//!
//! The collection lives in [`CitiesService`], which talks to the Remote City
//! Store through the [`CityStore`](clients::CityStore) seam and applies every
//! change through the reducer in [`state`].
//!
//! ## Store endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/cities` | List visits |
//! | GET | `/cities/{id}` | Get one visit |
//! | POST | `/cities` | Create a visit (server assigns `id`) |
//! | DELETE | `/cities/{id}` | Delete a visit |

pub mod clients;
pub mod dtos;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod state;

pub use error::CitiesError;
pub use form::CityForm;
pub use services::CitiesService;
pub use state::{CitiesAction, CitiesState};
