//! Application Configuration
//!
//! wasm has no process environment at runtime, so overrides are read from
//! compile-time variables:
//! - `CATALOG_API_BASE_URL`: backend origin (default `http://localhost:5004`)
//! - `CATALOG_LOG_LEVEL`: `error` | `warn` | `info` | `debug` | `trace` | `off`

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5004";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_TITLE: &str = "NorthwindEntities";

/// Frontend configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Page heading
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CATALOG_API_BASE_URL"), option_env!("CATALOG_LOG_LEVEL"))
    }

    /// Build from raw override values, falling back to defaults for missing or invalid ones
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(level) = log_level.and_then(|level| level.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:5004");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.title, "NorthwindEntities");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://api.example.test/"), Some("DEBUG"));
        assert_eq!(config.api_base_url, "https://api.example.test");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
