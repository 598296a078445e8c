use thiserror::Error;

use crate::shared::constants::{
    MSG_CREATE_CITY_FAILED, MSG_DELETE_CITY_FAILED, MSG_LOAD_CITIES_FAILED, MSG_LOAD_CITY_FAILED,
};

/// Operation-scoped failure kept in the cities state
///
/// The transport cause is logged where it happens and deliberately not kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CitiesError {
    #[error("{}", MSG_LOAD_CITIES_FAILED)]
    LoadAllFailed,

    #[error("{}", MSG_LOAD_CITY_FAILED)]
    LoadOneFailed,

    #[error("{}", MSG_CREATE_CITY_FAILED)]
    CreateFailed,

    #[error("{}", MSG_DELETE_CITY_FAILED)]
    DeleteFailed,
}

impl CitiesError {
    pub fn message(&self) -> &'static str {
        match self {
            CitiesError::LoadAllFailed => MSG_LOAD_CITIES_FAILED,
            CitiesError::LoadOneFailed => MSG_LOAD_CITY_FAILED,
            CitiesError::CreateFailed => MSG_CREATE_CITY_FAILED,
            CitiesError::DeleteFailed => MSG_DELETE_CITY_FAILED,
        }
    }
}
