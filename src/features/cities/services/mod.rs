mod cities_service;

pub use cities_service::CitiesService;
