use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub city_store: CityStoreConfig,
    pub geocoding: GeocodingConfig,
}

/// Remote City Store connection settings
#[derive(Debug, Clone)]
pub struct CityStoreConfig {
    /// Base address of the store, without the `/cities` suffix
    pub base_url: String,
}

/// Reverse-geocoding lookup settings used to prefill the city form
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            city_store: CityStoreConfig::from_env()?,
            geocoding: GeocodingConfig::from_env()?,
        })
    }
}

impl CityStoreConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("CITY_STORE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url: normalize_base_url(&base_url, "CITY_STORE_URL")?,
        })
    }
}

impl GeocodingConfig {
    const DEFAULT_BASE_URL: &'static str =
        "https://api.bigdatacloud.net/data/reverse-geocode-client";
    const DEFAULT_USER_AGENT: &'static str = "WorldWise/1.0";

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("GEOCODING_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        let user_agent = env::var("GEOCODING_USER_AGENT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url: normalize_base_url(&base_url, "GEOCODING_URL")?,
            user_agent,
        })
    }
}

/// Trim whitespace and trailing slashes, rejecting anything that is not http(s)
fn normalize_base_url(raw: &str, var: &str) -> Result<String, String> {
    let url = raw.trim().trim_end_matches('/');

    if url.is_empty() {
        return Err(format!("{} must not be empty", var));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(format!("{} must be an http(s) URL, got '{}'", var, url));
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://localhost:8000/ ", "CITY_STORE_URL").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_other_schemes() {
        assert!(normalize_base_url("ftp://example.com", "CITY_STORE_URL").is_err());
        assert!(normalize_base_url("", "CITY_STORE_URL").is_err());
        assert!(normalize_base_url("/", "CITY_STORE_URL").is_err());
    }
}
