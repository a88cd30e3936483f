//! Notification sink trait and reference implementations.

use async_trait::async_trait;
use thiserror::Error;

use crate::intent::NotificationIntent;

/// Errors from notification delivery.
///
/// Delivery is best-effort from the engine's perspective: the store mutation
/// paired with an intent is authoritative even when the send fails.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery failed: {0}")]
    Failed(String),
}

/// Trait for delivering notification intents.
///
/// Abstracted to support different transports (chat platforms, tests, etc.)
#[async_trait]
pub trait IntentSink: Send + Sync {
    /// Deliver one notification intent.
    async fn deliver(&self, intent: &NotificationIntent) -> Result<(), DeliveryError>;
}

/// A no-op sink for testing that discards all intents.
#[derive(Debug, Clone, Default)]
pub struct NoOpSink;

#[async_trait]
impl IntentSink for NoOpSink {
    async fn deliver(&self, _intent: &NotificationIntent) -> Result<(), DeliveryError> {
        Ok(())
    }
}

/// A logging sink for debugging that logs every intent.
#[derive(Debug, Clone, Default)]
pub struct LoggingSink;

#[async_trait]
impl IntentSink for LoggingSink {
    async fn deliver(&self, intent: &NotificationIntent) -> Result<(), DeliveryError> {
        tracing::info!(
            "[{:?}] notify subscriber {}: switch to {} tires (count: {}, forecast: {:?})",
            intent.kind,
            intent.subscriber_id,
            intent.recommended,
            intent.escalation_count,
            intent.forecast_average,
        );
        Ok(())
    }
}
