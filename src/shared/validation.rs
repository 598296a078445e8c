use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for ISO 3166-1 alpha-2 country codes as returned by reverse geocoding
    /// - Valid: "PT", "pt", "Id"
    /// - Invalid: "PRT", "P", "P1", " pt"
    pub static ref COUNTRY_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}$").unwrap();
}
