//! Notification intents emitted by the alert lifecycle engine.

use serde::{Deserialize, Serialize};

use crate::tire::TireType;

/// Why a notification is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    /// A new alert was just opened; carries the forecast average.
    New,
    /// An open alert was escalated without acknowledgment.
    Resend,
    /// The alert was resolved and the tire type auto-applied.
    Resolved,
}

/// A request to deliver one notification to one subscriber.
///
/// The engine treats delivery as fire-and-forget: the store mutation paired
/// with an intent is already committed by the time the intent is handed to
/// the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationIntent {
    /// Owning subscriber (chat/account id).
    pub subscriber_id: i64,
    pub kind: IntentKind,
    /// The tire type the alert is escalating toward.
    pub recommended: TireType,
    /// Escalation count after the mutation that produced this intent.
    pub escalation_count: i64,
    /// Forecast average (°C) for message context; only on `New` intents.
    pub forecast_average: Option<f64>,
}

impl NotificationIntent {
    /// Intent for a freshly opened alert.
    pub fn opened(subscriber_id: i64, recommended: TireType, forecast_average: f64) -> Self {
        Self {
            subscriber_id,
            kind: IntentKind::New,
            recommended,
            escalation_count: 0,
            forecast_average: Some(forecast_average),
        }
    }

    /// Intent for an escalated alert, carrying the incremented count.
    pub fn resend(subscriber_id: i64, recommended: TireType, escalation_count: i64) -> Self {
        Self {
            subscriber_id,
            kind: IntentKind::Resend,
            recommended,
            escalation_count,
            forecast_average: None,
        }
    }

    /// Intent for an auto-applied alert.
    pub fn resolved(subscriber_id: i64, recommended: TireType, escalation_count: i64) -> Self {
        Self {
            subscriber_id,
            kind: IntentKind::Resolved,
            recommended,
            escalation_count,
            forecast_average: None,
        }
    }
}

/// A subscriber's reaction to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckDecision {
    /// Apply the recommended tire type now and close the alert.
    ApplyNow,
    /// Keep the alert open; the next cycle will remind again.
    Defer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opened_intent_carries_forecast() {
        let intent = NotificationIntent::opened(42, TireType::Summer, 10.0);
        assert_eq!(intent.kind, IntentKind::New);
        assert_eq!(intent.escalation_count, 0);
        assert_eq!(intent.forecast_average, Some(10.0));
    }

    #[test]
    fn test_resend_and_resolved_have_no_forecast() {
        let resend = NotificationIntent::resend(42, TireType::Winter, 2);
        assert_eq!(resend.kind, IntentKind::Resend);
        assert_eq!(resend.escalation_count, 2);
        assert!(resend.forecast_average.is_none());

        let resolved = NotificationIntent::resolved(42, TireType::Winter, 2);
        assert_eq!(resolved.kind, IntentKind::Resolved);
        assert!(resolved.forecast_average.is_none());
    }
}
