//! Weather forecast client for the Tiretime alert service.
//!
//! Implements [`alert_core::ForecastProvider`] against a weatherapi.com-style
//! forecast endpoint: the multi-day average temperature for a location is the
//! mean of the per-day `avgtemp_c` values.

mod api_types;
mod client;
mod config;

pub use api_types::{Day, ForecastDay, ForecastDays, ForecastResponse};
pub use client::WeatherApi;
pub use config::WeatherApiConfig;

// Re-export the trait and error type the client implements
pub use alert_core::{ForecastError, ForecastProvider};
