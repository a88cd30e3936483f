//! Configuration for the weather API client.

use std::env;

use alert_core::ForecastError;

/// Default forecast API base URL.
pub const DEFAULT_API_URL: &str = "https://api.weatherapi.com";

/// Configuration for [`crate::WeatherApi`].
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// Forecast API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl WeatherApiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `WEATHER_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `WEATHER_API_URL` - API base URL (default: https://api.weatherapi.com)
    pub fn from_env() -> Result<Self, ForecastError> {
        let api_key = env::var("WEATHER_API_KEY")
            .map_err(|_| ForecastError::Unavailable("WEATHER_API_KEY not set".to_string()))?;

        let api_url = env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self { api_url, api_key })
    }

    /// Create a new config builder.
    pub fn builder() -> WeatherApiConfigBuilder {
        WeatherApiConfigBuilder::default()
    }
}

/// Builder for WeatherApiConfig.
#[derive(Debug, Default)]
pub struct WeatherApiConfigBuilder {
    config: WeatherApiConfig,
}

impl WeatherApiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> WeatherApiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeatherApiConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = WeatherApiConfig::builder()
            .api_key("test-key")
            .api_url("https://forecast.example.com")
            .build();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_url, "https://forecast.example.com");
    }

    // Environment scenarios share one test to avoid races on process-global
    // env vars.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::remove_var("WEATHER_API_KEY");
        std::env::remove_var("WEATHER_API_URL");

        // Missing API key should error.
        assert!(WeatherApiConfig::from_env().is_err());

        // Only the key set: default URL used.
        std::env::set_var("WEATHER_API_KEY", "env-key");
        let config = WeatherApiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);

        // Both set.
        std::env::set_var("WEATHER_API_URL", "https://proxy.example.com");
        let config = WeatherApiConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://proxy.example.com");

        std::env::remove_var("WEATHER_API_KEY");
        std::env::remove_var("WEATHER_API_URL");
    }
}
