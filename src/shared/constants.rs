// =============================================================================
// CITY STATE MESSAGES
// =============================================================================

pub const MSG_LOAD_CITIES_FAILED: &str = "There was an error loading cities...";
pub const MSG_LOAD_CITY_FAILED: &str = "There was an error loading city...";
pub const MSG_CREATE_CITY_FAILED: &str = "There was an error creating city.";
pub const MSG_DELETE_CITY_FAILED: &str = "There was an error deleting city.";

// =============================================================================
// GEO
// =============================================================================

pub const MSG_NOT_A_CITY: &str = "That doesn't seem to be a city. Click somewhere else";
pub const MSG_START_BY_CLICKING: &str = "Start by clicking somewhere on the map";
pub const MSG_GEOLOCATION_UNSUPPORTED: &str = "Your browser does not support geolocation";

/// Offset between an ASCII uppercase letter and its regional indicator symbol
pub const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

pub const FLAG_CDN_BASE_URL: &str = "https://flagcdn.com/24x18";
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki";

// =============================================================================
// FAKE AUTH
// =============================================================================

pub const FAKE_USER_NAME: &str = "Jack";
pub const FAKE_USER_EMAIL: &str = "jack@example.com";
pub const FAKE_USER_PASSWORD: &str = "qwerty";
pub const FAKE_USER_AVATAR: &str = "https://i.pravatar.cc/100?u=zz";
