use reqwest::Url;

use crate::features::cities::models::{CityId, CityVisit, Position};

/// Every screen reachable by URL
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Home,
    Product,
    Pricing,
    Login,
    /// `/app` and `/app/cities`
    Cities,
    City {
        id: CityId,
        position: Option<Position>,
    },
    Countries,
    Form {
        position: Option<Position>,
    },
    NotFound(String),
}

impl AppRoute {
    /// Parse an in-app location such as `/app/cities/7?lat=38.7&lng=-9.1`
    pub fn parse(location: &str) -> Self {
        let url = match Url::parse("http://localhost").and_then(|base| base.join(location)) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Unparseable location '{}': {}", location, e);
                return AppRoute::NotFound(location.to_string());
            }
        };

        let position = query_position(&url);
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["product"] => AppRoute::Product,
            ["pricing"] => AppRoute::Pricing,
            ["login"] => AppRoute::Login,
            ["app"] | ["app", "cities"] => AppRoute::Cities,
            ["app", "cities", id] => AppRoute::City {
                id: decode_segment(id).as_str().into(),
                position,
            },
            ["app", "countries"] => AppRoute::Countries,
            ["app", "form"] => AppRoute::Form { position },
            _ => AppRoute::NotFound(url.path().to_string()),
        }
    }

    /// Routes behind the login gate
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            AppRoute::Cities | AppRoute::City { .. } | AppRoute::Countries | AppRoute::Form { .. }
        )
    }

    /// Canonical location for the route
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Product => "/product".to_string(),
            AppRoute::Pricing => "/pricing".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Cities => "/app/cities".to_string(),
            AppRoute::City { id, position } => with_position(
                format!("/app/cities/{}", urlencoding::encode(&id.to_string())),
                position,
            ),
            AppRoute::Countries => "/app/countries".to_string(),
            AppRoute::Form { position } => with_position("/app/form".to_string(), position),
            AppRoute::NotFound(path) => path.clone(),
        }
    }
}

/// Link from a city list item to its detail view
pub fn city_link(city: &CityVisit) -> String {
    AppRoute::City {
        id: city.id.clone(),
        position: Some(city.position),
    }
    .path()
}

/// Link from a map click to the creation form
pub fn form_link(position: Position) -> String {
    AppRoute::Form {
        position: Some(position),
    }
    .path()
}

fn with_position(path: String, position: &Option<Position>) -> String {
    match position {
        Some(p) => format!("{}?lat={}&lng={}", path, p.lat, p.lng),
        None => path,
    }
}

fn query_position(url: &Url) -> Option<Position> {
    let mut lat = None;
    let mut lng = None;

    for (key, value) in url.query_pairs() {
        match &*key {
            "lat" => lat = value.parse::<f64>().ok(),
            "lng" => lng = value.parse::<f64>().ok(),
            _ => {}
        }
    }

    Some(Position::new(lat?, lng?))
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
