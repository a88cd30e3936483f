//! Forecast API response types.

use serde::Deserialize;

/// Top-level forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub forecast: ForecastDays,
}

/// The forecast section of the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDays {
    #[serde(rename = "forecastday")]
    pub days: Vec<ForecastDay>,
}

/// One forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: Day,
}

/// Per-day aggregates.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    /// Average temperature in °C.
    pub avgtemp_c: f64,
}

impl ForecastResponse {
    /// Mean of the per-day average temperatures, or `None` for an empty
    /// forecast.
    pub fn average_temperature(&self) -> Option<f64> {
        let days = &self.forecast.days;
        if days.is_empty() {
            return None;
        }

        let sum: f64 = days.iter().map(|d| d.day.avgtemp_c).sum();
        Some(sum / days.len() as f64)
    }
}
