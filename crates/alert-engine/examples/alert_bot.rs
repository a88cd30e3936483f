//! Periodic alert bot example.
//!
//! Wires the alert engine to the real weather API and a logging sink, then
//! drives it from a local interval timer. In production the scheduler is
//! external; the engine itself holds no timer state.
//!
//! Run with: cargo run -p alert-engine --example alert_bot
//!
//! Configuration via .env file or environment variables:
//!   WEATHER_API_KEY                    - forecast API key (required)
//!   WEATHER_API_URL                    - forecast API base URL (optional)
//!   TIRETIME_DB_URL                    - database URL (default: sqlite:tiretime.db?mode=rwc)
//!   TIRETIME_CYCLE_SECONDS             - evaluation period (default: 86400)
//!   TIRETIME_FORECAST_DAYS             - forecast horizon (default: 7)
//!   TIRETIME_EXPIRATION_THRESHOLD      - escalation budget (default: 3)
//!   TIRETIME_MAX_CONCURRENT_FORECASTS  - forecast fan-out bound (default: 4)

use std::env;
use std::time::Duration;

use alert_core::LoggingSink;
use alert_engine::{AlertEngine, Database, EngineConfig};
use tracing::{error, info};
use weather_api::WeatherApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_url =
        env::var("TIRETIME_DB_URL").unwrap_or_else(|_| "sqlite:tiretime.db?mode=rwc".to_string());
    let cycle_seconds: u64 = env::var("TIRETIME_CYCLE_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(86_400);

    let db = Database::connect(&db_url).await?;
    db.migrate().await?;

    let forecast = WeatherApi::from_env()?;
    let engine = AlertEngine::new(db, forecast, LoggingSink, EngineConfig::from_env());

    info!(
        "Alert bot started (cycle every {}s, threshold {})",
        cycle_seconds,
        engine.config().expiration_threshold
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(cycle_seconds));
    loop {
        ticker.tick().await;

        match engine.evaluate_cycle().await {
            Ok(report) => info!("Cycle report: {:?}", report),
            Err(e) => error!("Evaluation cycle failed: {}", e),
        }
    }
}
