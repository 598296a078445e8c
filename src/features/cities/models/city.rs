use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::WIKIPEDIA_BASE_URL;
use crate::shared::{flags, format};

/// Identifier assigned by the Remote City Store
///
/// json-server hands out numeric ids in older releases and string ids in newer
/// ones, so both wire forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityId {
    Number(u64),
    Text(String),
}

impl FromStr for CityId {
    type Err = Infallible;

    /// All-digit input (e.g. a URL path segment) parses to `Number` so that it
    /// compares equal to the numeric id the store returned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map(CityId::Number)
            .unwrap_or_else(|_| CityId::Text(s.to_string())))
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityId::Number(n) => write!(f, "{}", n),
            CityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CityId {
    fn from(id: u64) -> Self {
        CityId::Number(id)
    }
}

impl From<&str> for CityId {
    fn from(id: &str) -> Self {
        match id.parse::<CityId>() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

/// Map coordinates of a visit, fixed at creation time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A recorded travel entry as stored by the Remote City Store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityVisit {
    pub id: CityId,
    pub city_name: String,
    pub country: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(with = "format::iso8601")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

impl CityVisit {
    pub fn formatted_date(&self) -> String {
        format::format_visit_date(&self.date)
    }

    pub fn flag_url(&self) -> Option<String> {
        flags::flag_image_url(&self.emoji)
    }

    pub fn wikipedia_url(&self) -> String {
        format!(
            "{}/{}",
            WIKIPEDIA_BASE_URL,
            urlencoding::encode(&self.city_name)
        )
    }
}
