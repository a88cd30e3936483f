//! Core types and trait seams for the Tiretime alert service.
//!
//! This crate provides the shared interface between the alert lifecycle
//! engine and its collaborators:
//!
//! - [`TireType`] and the threshold classifier ([`classify`], [`classify_at`])
//! - [`Location`] - geographic coordinates in decimal degrees
//! - [`NotificationIntent`] / [`IntentKind`] - what the engine asks to deliver
//! - [`ForecastProvider`] - trait for average-temperature forecast clients
//! - [`IntentSink`] - trait for notification delivery transports
//!
//! # Example
//!
//! ```rust
//! use alert_core::{classify, TireType};
//!
//! assert_eq!(classify(3.5), TireType::Winter);
//! assert_eq!(classify(10.0), TireType::Summer);
//! assert_eq!(TireType::Winter.opposite(), TireType::Summer);
//! ```

mod forecast;
mod intent;
mod location;
mod sink;
mod tire;

pub use forecast::{ForecastError, ForecastProvider};
pub use intent::{AckDecision, IntentKind, NotificationIntent};
pub use location::Location;
pub use sink::{DeliveryError, IntentSink, LoggingSink, NoOpSink};
pub use tire::{classify, classify_at, InvalidTireType, TireType, WINTER_BOUNDARY_C};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
