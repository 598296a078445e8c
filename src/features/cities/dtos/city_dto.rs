use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::cities::models::Position;
use crate::shared::format;

/// Request body for creating a city visit (every field except `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCityVisit {
    #[validate(length(min = 1, message = "City name is required"))]
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
