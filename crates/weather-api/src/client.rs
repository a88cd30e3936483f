//! WeatherApi client implementation.

use alert_core::{async_trait, ForecastError, ForecastProvider, Location};
use reqwest::Client;
use tracing::debug;

use crate::api_types::ForecastResponse;
use crate::config::WeatherApiConfig;

/// A forecast client for a weatherapi.com-style endpoint.
pub struct WeatherApi {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApi {
    /// Create a new client with the given configuration.
    pub fn new(config: WeatherApiConfig) -> Result<Self, ForecastError> {
        let client = Client::builder().build().map_err(|e| {
            ForecastError::Unavailable(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`WeatherApiConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, ForecastError> {
        let config = WeatherApiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &WeatherApiConfig {
        &self.config
    }

    async fn fetch_forecast(
        &self,
        location: Location,
        days: u8,
    ) -> Result<ForecastResponse, ForecastError> {
        let url = format!("{}/v1/forecast.json", self.config.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", &location.to_string()),
                ("days", &days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ForecastError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastError::Unavailable(format!(
                "forecast API returned {}: {}",
                status, body
            )));
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| ForecastError::Unavailable(format!("invalid response: {}", e)))
    }
}

#[async_trait]
impl ForecastProvider for WeatherApi {
    async fn average_temperature(
        &self,
        location: Location,
        days: u8,
    ) -> Result<f64, ForecastError> {
        let forecast = self.fetch_forecast(location, days).await?;

        let average = forecast.average_temperature().ok_or_else(|| {
            ForecastError::Unavailable("forecast contained no days".to_string())
        })?;

        debug!(
            "Forecast for {}: {:.1}°C average over {} days",
            location, average, days
        );

        Ok(average)
    }
}
