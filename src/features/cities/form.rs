use chrono::{DateTime, Utc};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::NewCityVisit;
use crate::features::cities::models::Position;
use crate::features::geocoding::GeocodedPlace;
use crate::shared::constants::MSG_START_BY_CLICKING;

/// Editable state of the "add city" form
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CityForm {
    pub position: Position,

    #[validate(length(min = 1, message = "City name is required"))]
    pub city_name: String,

    pub country: String,

    pub emoji: String,

    #[validate(required(message = "Visit date is required"))]
    pub date: Option<DateTime<Utc>>,

    pub notes: String,
}

impl CityForm {
    /// Empty form for a map position, dated now
    pub fn at(position: Position) -> Self {
        Self {
            position,
            city_name: String::new(),
            country: String::new(),
            emoji: String::new(),
            date: Some(Utc::now()),
            notes: String::new(),
        }
    }

    /// Form for the position carried by the form route, if any
    pub fn for_route(position: Option<Position>) -> Result<Self> {
        position
            .map(Self::at)
            .ok_or_else(|| AppError::Validation(MSG_START_BY_CLICKING.to_string()))
    }

    /// Copy the looked-up place into the form fields
    pub fn prefill(&mut self, place: &GeocodedPlace) {
        self.city_name = place.city_name.clone();
        self.country = place.country.clone();
        self.emoji = place.emoji.clone();
    }

    /// Check required fields and build the create request
    pub fn into_draft(self) -> Result<NewCityVisit> {
        self.validate()?;

        let date = self
            .date
            .ok_or_else(|| AppError::Validation("Visit date is required".to_string()))?;

        Ok(NewCityVisit {
            city_name: self.city_name,
            country: self.country,
            emoji: self.emoji,
            date,
            notes: self.notes,
            position: self.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lisbon() -> GeocodedPlace {
        GeocodedPlace {
            city_name: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            country_code: "PT".to_string(),
            emoji: "🇵🇹".to_string(),
        }
    }

    #[test]
    fn test_prefilled_form_becomes_draft() {
        let mut form = CityForm::at(Position::new(38.7, -9.1));
        form.prefill(&lisbon());
        form.notes = "Pastéis de nata".to_string();

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.city_name, "Lisbon");
        assert_eq!(draft.country, "Portugal");
        assert_eq!(draft.emoji, "🇵🇹");
        assert_eq!(draft.notes, "Pastéis de nata");
        assert_eq!(draft.position, Position::new(38.7, -9.1));
    }

    #[test]
    fn test_form_requires_city_name() {
        let form = CityForm::at(Position::new(38.7, -9.1));

        let err = form.into_draft().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("City name is required")));
    }

    #[test]
    fn test_form_requires_date() {
        let mut form = CityForm::at(Position::new(38.7, -9.1));
        form.prefill(&lisbon());
        form.date = None;

        let err = form.into_draft().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("Visit date is required")));
    }

    #[test]
    fn test_form_route_without_position() {
        let err = CityForm::for_route(None).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref msg) if msg == "Start by clicking somewhere on the map")
        );
        assert!(CityForm::for_route(Some(Position::new(1.0, 2.0))).is_ok());
    }
}
