//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level. Installation uses `try_init`,
//! so a second call (or a subscriber installed by the host application)
//! leaves the existing one in place.

use tracing_subscriber::EnvFilter;
use workload_domain::{LoggingConfig, Result, WorkloadError};

/// Build the log filter from `RUST_LOG`, falling back to `config.level`
///
/// # Errors
/// Returns `WorkloadError::Config` if the configured level is not a valid
/// filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim()).map_err(|e| {
        WorkloadError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Install the global subscriber
///
/// Returns `Ok(false)` when a global subscriber was already set.
///
/// # Errors
/// Returns `WorkloadError::Config` for an invalid log level.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).json().try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Global subscriber already set");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn config(level: &str, json: bool) -> LoggingConfig {
        LoggingConfig { level: level.to_string(), json }
    }

    #[test]
    fn test_build_filter_from_config() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        assert!(build_filter(&config("workload_core=debug,info", false)).is_ok());
        assert!(build_filter(&config(" warn ", false)).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_invalid_level() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let result = build_filter(&config("workload=verbose", false));
        assert!(matches!(result, Err(WorkloadError::Config(_))));
    }

    #[test]
    fn test_rust_log_wins() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var("RUST_LOG", "warn");

        let filter = build_filter(&config("workload=verbose", false)).unwrap();
        assert_eq!(filter.to_string(), "warn");

        std::env::remove_var("RUST_LOG");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        init_logging(&config("info", false)).unwrap();
        let second = init_logging(&config("debug", true)).unwrap();
        assert!(!second);
    }
}
