//! Alert lifecycle engine for the Tiretime tire-change alert service.
//!
//! The engine owns the full lifecycle of a tire-change alert:
//!
//! - [`AlertEngine::evaluate_cycle`] - the periodic entry point, invoked by
//!   an external scheduler. Opens alerts for subscribers whose forecast no
//!   longer matches their tires, re-sends open alerts, and auto-applies the
//!   change when the escalation budget is exhausted.
//! - [`AlertEngine::acknowledge`] - the on-demand entry point, invoked when a
//!   subscriber reacts to a notification.
//!
//! Forecasting and delivery are abstracted behind
//! [`alert_core::ForecastProvider`] and [`alert_core::IntentSink`]; the
//! engine is the only writer of alert state.

mod config;
mod engine;
mod error;

pub use config::EngineConfig;
pub use engine::{AckOutcome, AlertEngine, CycleReport};
pub use error::EngineError;

// Re-export the seam types callers wire together
pub use alert_core::{
    AckDecision, ForecastProvider, IntentKind, IntentSink, NotificationIntent, TireType,
};
pub use tiretime_database::Database;
