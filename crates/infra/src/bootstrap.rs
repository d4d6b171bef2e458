//! Start-up wiring: configuration, logging and the estimation service

use workload_core::EstimationService;
use workload_domain::{Config, Result};

use crate::config;
use crate::observability::init_logging;
use crate::rates::ConfigRateSource;

/// Everything the application needs after start-up
#[derive(Debug, Clone)]
pub struct Runtime {
    pub config: Config,
    pub estimation: EstimationService,
}

/// Load configuration, install logging and build the estimation service
///
/// # Errors
/// Returns `WorkloadError::Config` if the configuration cannot be loaded, the
/// log level is invalid, or the rate table fails validation.
pub fn bootstrap() -> Result<Runtime> {
    let config = config::load()?;
    init_logging(&config.logging)?;
    from_config(config)
}

/// Build the runtime from an already loaded configuration
///
/// # Errors
/// Returns `WorkloadError::Config` if the rate table fails validation.
pub fn from_config(config: Config) -> Result<Runtime> {
    let source = ConfigRateSource::new(config.estimator.clone());
    let estimation = EstimationService::from_source(&source)?;
    Ok(Runtime { config, estimation })
}
