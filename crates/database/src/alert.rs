//! Alert operations.
//!
//! All mutations here are conditional: the engine's resend sweep and a
//! concurrent acknowledgment may race on the same alert row, and exactly one
//! of them must win. The loser observes zero affected rows and gets `false`
//! back instead of an error.

use alert_core::TireType;
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Alert;

/// Open a new alert.
///
/// The `alerts` table is keyed by subscriber id, so opening a second alert
/// for the same subscriber fails with [`DatabaseError::AlreadyExists`].
pub async fn create_alert(pool: &SqlitePool, alert: &Alert) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO alerts (subscriber_id, recommended, count)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(alert.subscriber_id)
    .bind(alert.recommended.as_i64())
    .bind(alert.count)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Alert",
                    id: alert.subscriber_id,
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a subscriber's open alert, if any.
pub async fn get_alert(pool: &SqlitePool, subscriber_id: i64) -> Result<Option<Alert>> {
    let alert = sqlx::query_as::<_, Alert>(
        r#"
        SELECT subscriber_id, recommended, count
        FROM alerts
        WHERE subscriber_id = ?
        "#,
    )
    .bind(subscriber_id)
    .fetch_optional(pool)
    .await?;

    Ok(alert)
}

/// List alerts that have never been re-sent (`count == 0`).
pub async fn list_unsent(pool: &SqlitePool) -> Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>(
        r#"
        SELECT subscriber_id, recommended, count
        FROM alerts
        WHERE count = 0
        ORDER BY subscriber_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// List alerts that have been re-sent at least once (`count > 0`).
pub async fn list_sent(pool: &SqlitePool) -> Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>(
        r#"
        SELECT subscriber_id, recommended, count
        FROM alerts
        WHERE count > 0
        ORDER BY subscriber_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// Increment an alert's escalation count if it still holds the expected
/// value.
///
/// Returns `false` when the row is gone or the count moved on - the
/// compare-and-set lost to a concurrent resolve and the caller must not
/// treat the alert as escalated.
pub async fn increment_if_count(
    pool: &SqlitePool,
    subscriber_id: i64,
    expected_count: i64,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE alerts
        SET count = count + 1
        WHERE subscriber_id = ? AND count = ?
        "#,
    )
    .bind(subscriber_id)
    .bind(expected_count)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Resolve an alert: delete the row and apply the recommended tire type,
/// atomically.
///
/// Returns `false` without touching the subscriber when no alert row exists
/// (already acknowledged or already auto-resolved). Used by both the
/// cycle-driven auto-resolve and explicit acknowledgment, so both paths are
/// idempotent and mutually exclusive.
pub async fn resolve(
    pool: &SqlitePool,
    subscriber_id: i64,
    recommended: TireType,
) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM alerts
        WHERE subscriber_id = ?
        "#,
    )
    .bind(subscriber_id)
    .execute(&mut *tx)
    .await?;

    if deleted.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        r#"
        UPDATE subscribers
        SET tire_type = ?
        WHERE id = ?
        "#,
    )
    .bind(recommended.as_i64())
    .bind(subscriber_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(true)
}

/// Delete a subscriber's alert without touching the tire type.
///
/// Returns `false` when no alert existed; missing rows are not an error on
/// this path.
pub async fn delete_by_subscriber(pool: &SqlitePool, subscriber_id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM alerts
        WHERE subscriber_id = ?
        "#,
    )
    .bind(subscriber_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Count open alerts.
pub async fn count_alerts(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM alerts
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
