//! SQLite persistence layer for Tiretime.
//!
//! This crate provides async database operations for subscribers and their
//! open alerts using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use alert_core::TireType;
//! use database::{models::Subscriber, subscriber, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:tiretime.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Onboard a subscriber
//!     let subscriber = Subscriber {
//!         id: 42,
//!         latitude: 41.4023,
//!         longitude: 2.1745,
//!         tire_type: TireType::Summer,
//!     };
//!     subscriber::upsert_subscriber(db.pool(), &subscriber).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod error;
pub mod models;
pub mod subscriber;

pub use error::{DatabaseError, Result};
pub use models::{Alert, Subscriber};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// High enough for one evaluation cycle's bounded fan-out plus
    /// concurrent acknowledgments.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
