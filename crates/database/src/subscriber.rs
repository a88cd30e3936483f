//! Subscriber CRUD operations.

use alert_core::TireType;
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Subscriber;

/// Create or replace a subscriber (onboarding and re-onboarding).
///
/// Re-onboarding clears any open alert in the same transaction: a stale
/// recommendation computed for the old location or tire type must not
/// keep escalating against the new configuration.
pub async fn upsert_subscriber(pool: &SqlitePool, subscriber: &Subscriber) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO subscribers (id, latitude, longitude, tire_type)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            latitude = excluded.latitude,
            longitude = excluded.longitude,
            tire_type = excluded.tire_type
        "#,
    )
    .bind(subscriber.id)
    .bind(subscriber.latitude)
    .bind(subscriber.longitude)
    .bind(subscriber.tire_type.as_i64())
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        DELETE FROM alerts
        WHERE subscriber_id = ?
        "#,
    )
    .bind(subscriber.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Get a subscriber by id.
pub async fn get_subscriber(pool: &SqlitePool, id: i64) -> Result<Subscriber> {
    sqlx::query_as::<_, Subscriber>(
        r#"
        SELECT id, latitude, longitude, tire_type
        FROM subscribers
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DatabaseError::NotFound {
        entity: "Subscriber",
        id,
    })
}

/// List all subscribers.
pub async fn list_subscribers(pool: &SqlitePool) -> Result<Vec<Subscriber>> {
    let subscribers = sqlx::query_as::<_, Subscriber>(
        r#"
        SELECT id, latitude, longitude, tire_type
        FROM subscribers
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(subscribers)
}

/// List subscribers with no open alert (candidates for a new alert).
pub async fn list_unalerted(pool: &SqlitePool) -> Result<Vec<Subscriber>> {
    let subscribers = sqlx::query_as::<_, Subscriber>(
        r#"
        SELECT s.id, s.latitude, s.longitude, s.tire_type
        FROM subscribers s
        WHERE NOT EXISTS (
            SELECT 1 FROM alerts a WHERE a.subscriber_id = s.id
        )
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(subscribers)
}

/// Set a subscriber's tire type.
pub async fn set_tire_type(pool: &SqlitePool, id: i64, tire_type: TireType) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE subscribers
        SET tire_type = ?
        WHERE id = ?
        "#,
    )
    .bind(tire_type.as_i64())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Subscriber",
            id,
        });
    }

    Ok(())
}

/// Delete a subscriber by id. The alert row, if any, cascades.
pub async fn delete_subscriber(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM subscribers
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Subscriber",
            id,
        });
    }

    Ok(())
}

/// Count total subscribers.
pub async fn count_subscribers(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM subscribers
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
