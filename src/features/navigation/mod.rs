pub mod routes;

pub use routes::{city_link, form_link, AppRoute};
