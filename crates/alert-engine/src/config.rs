//! Engine tunables.

use std::env;

/// Default forecast horizon for new-alert classification, in days.
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

/// Default escalation count at which an alert auto-resolves.
pub const DEFAULT_EXPIRATION_THRESHOLD: i64 = 3;

/// Default bound on concurrent forecast requests per cycle.
pub const DEFAULT_MAX_CONCURRENT_FORECASTS: usize = 4;

/// Tunables for [`crate::AlertEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Forecast horizon used when classifying candidates.
    pub forecast_days: u8,

    /// Escalation count at which an alert auto-resolves. An alert is
    /// notified once at open, then up to `expiration_threshold - 1` more
    /// times before the change is applied automatically.
    pub expiration_threshold: i64,

    /// Bound on concurrent forecast requests (external API rate limits).
    pub max_concurrent_forecasts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            forecast_days: DEFAULT_FORECAST_DAYS,
            expiration_threshold: DEFAULT_EXPIRATION_THRESHOLD,
            max_concurrent_forecasts: DEFAULT_MAX_CONCURRENT_FORECASTS,
        }
    }
}

impl EngineConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults.
    ///
    /// Optional environment variables:
    /// - `TIRETIME_FORECAST_DAYS` (default: 7)
    /// - `TIRETIME_EXPIRATION_THRESHOLD` (default: 3)
    /// - `TIRETIME_MAX_CONCURRENT_FORECASTS` (default: 4)
    pub fn from_env() -> Self {
        let forecast_days = env::var("TIRETIME_FORECAST_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FORECAST_DAYS);

        let expiration_threshold = env::var("TIRETIME_EXPIRATION_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&t: &i64| t >= 1)
            .unwrap_or(DEFAULT_EXPIRATION_THRESHOLD);

        let max_concurrent_forecasts = env::var("TIRETIME_MAX_CONCURRENT_FORECASTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n >= 1)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_FORECASTS);

        Self {
            forecast_days,
            expiration_threshold,
            max_concurrent_forecasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.expiration_threshold, 3);
        assert_eq!(config.max_concurrent_forecasts, 4);
    }

    // Environment scenarios share one test to avoid races on process-global
    // env vars.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_vars() {
            std::env::remove_var("TIRETIME_FORECAST_DAYS");
            std::env::remove_var("TIRETIME_EXPIRATION_THRESHOLD");
            std::env::remove_var("TIRETIME_MAX_CONCURRENT_FORECASTS");
        }

        // Nothing set: defaults.
        clear_vars();
        let config = EngineConfig::from_env();
        assert_eq!(config.forecast_days, DEFAULT_FORECAST_DAYS);
        assert_eq!(config.expiration_threshold, DEFAULT_EXPIRATION_THRESHOLD);

        // All set.
        std::env::set_var("TIRETIME_FORECAST_DAYS", "3");
        std::env::set_var("TIRETIME_EXPIRATION_THRESHOLD", "5");
        std::env::set_var("TIRETIME_MAX_CONCURRENT_FORECASTS", "2");
        let config = EngineConfig::from_env();
        assert_eq!(config.forecast_days, 3);
        assert_eq!(config.expiration_threshold, 5);
        assert_eq!(config.max_concurrent_forecasts, 2);

        // Nonsense values fall back to defaults.
        std::env::set_var("TIRETIME_EXPIRATION_THRESHOLD", "0");
        std::env::set_var("TIRETIME_MAX_CONCURRENT_FORECASTS", "zero");
        let config = EngineConfig::from_env();
        assert_eq!(config.expiration_threshold, DEFAULT_EXPIRATION_THRESHOLD);
        assert_eq!(
            config.max_concurrent_forecasts,
            DEFAULT_MAX_CONCURRENT_FORECASTS
        );

        clear_vars();
    }
}
