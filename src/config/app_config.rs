use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::catalog::PokeApiConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// External catalog source settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Number of entries requested from the catalog listing
    pub limit: usize,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let defaults = PokeApiConfig::default();

        Self {
            base_url: defaults.base_url,
            limit: defaults.limit,
            timeout_secs: defaults.timeout.as_secs(),
        }
    }
}

impl From<&CatalogConfig> for PokeApiConfig {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            limit: config.limit,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.limit, 151);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("catalog.base_url", "http://localhost:9000")
            .unwrap()
            .set_override("catalog.limit", 20)
            .unwrap()
            .set_override("catalog.timeout_secs", 3)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.limit, 20);

        let client_config = PokeApiConfig::from(&config.catalog);
        assert_eq!(client_config.base_url, "http://localhost:9000");
        assert_eq!(client_config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("catalog.limit", 20)
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.limit, 20);
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_log_format_parsing() {
        let config: AppConfig = config::Config::builder()
            .set_override("logging.level", "debug")
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
