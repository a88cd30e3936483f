//! Database models.

use alert_core::{Location, TireType};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subscriber, identified by their chat/account id.
///
/// A subscriber with no row is "unconfigured" and never evaluated; the
/// onboarding collaborator creates rows via [`crate::subscriber::upsert_subscriber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Subscriber {
    /// Chat/account id (stable, unique).
    pub id: i64,
    /// Location latitude in decimal degrees.
    pub latitude: f64,
    /// Location longitude in decimal degrees.
    pub longitude: f64,
    /// Tire type currently mounted.
    #[sqlx(try_from = "i64")]
    pub tire_type: TireType,
}

impl Subscriber {
    /// The subscriber's location as a single value.
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// One in-flight tire-change recommendation for exactly one subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Alert {
    /// Owning subscriber id (primary key - at most one alert per subscriber).
    pub subscriber_id: i64,
    /// Tire type the alert is escalating toward; fixed at open time.
    #[sqlx(try_from = "i64")]
    pub recommended: TireType,
    /// Times the alert has been re-sent since creation.
    pub count: i64,
}

impl Alert {
    /// A freshly opened alert with a zero escalation count.
    pub fn open(subscriber_id: i64, recommended: TireType) -> Self {
        Self {
            subscriber_id,
            recommended,
            count: 0,
        }
    }
}
