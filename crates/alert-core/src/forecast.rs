//! Forecast provider trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::location::Location;

/// Errors from forecast lookups.
///
/// The engine treats these as per-candidate failures: the candidate is
/// skipped and the cycle continues.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Network or parse failure talking to the forecast service.
    #[error("forecast unavailable: {0}")]
    Unavailable(String),
}

/// Trait for average-temperature forecast clients.
///
/// Abstracted so the engine can be driven by a real weather API in
/// production and a scripted provider in tests.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Average temperature (°C) over the next `days` days at `location`.
    async fn average_temperature(
        &self,
        location: Location,
        days: u8,
    ) -> Result<f64, ForecastError>;
}
