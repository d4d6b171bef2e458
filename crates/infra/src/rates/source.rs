//! Rate table sources backed by configuration
//!
//! [`ConfigRateSource`] wraps an already loaded [`EstimatorConfig`];
//! [`FileRateSource`] reads a config file each time the table is requested.

use std::path::{Path, PathBuf};

use workload_core::RateTableSource as RateTableSourcePort;
use workload_domain::{EstimatorConfig, RateTable, Result};

use crate::config::load_from_file;

/// Rate table from an in-memory estimator configuration
#[derive(Debug, Clone)]
pub struct ConfigRateSource {
    config: EstimatorConfig,
    origin: String,
}

impl ConfigRateSource {
    /// Source for a loaded configuration
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config, origin: "config".to_string() }
    }

    /// Source for the built-in backend rules
    pub fn built_in() -> Self {
        Self { config: EstimatorConfig::default(), origin: "built-in".to_string() }
    }
}

impl RateTableSourcePort for ConfigRateSource {
    fn load_rate_table(&self) -> Result<RateTable> {
        RateTable::from_config(&self.config)
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}

/// Rate table from the `[estimator]` section of a TOML or JSON file
#[derive(Debug, Clone)]
pub struct FileRateSource {
    path: PathBuf,
}

impl FileRateSource {
    /// Source reading the given config file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateTableSourcePort for FileRateSource {
    fn load_rate_table(&self) -> Result<RateTable> {
        let config = load_from_file(Some(self.path.clone()))?;
        RateTable::from_config(&config.estimator)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use workload_domain::{JobType, TaskRateEntry, WorkloadError};

    use super::*;

    #[test]
    fn test_built_in_source() {
        let source = ConfigRateSource::built_in();
        let table = source.load_rate_table().unwrap();
        assert_eq!(table, RateTable::default());
        assert_eq!(source.describe(), "built-in");
    }

    #[test]
    fn test_config_source_rejects_invalid_rates() {
        let source = ConfigRateSource::new(EstimatorConfig {
            rates: vec![TaskRateEntry::new(JobType::Dev, "Backend", -1.0, "week")],
            ..EstimatorConfig::default()
        });
        assert!(matches!(source.load_rate_table(), Err(WorkloadError::Config(_))));
        assert_eq!(source.describe(), "config");
    }

    #[test]
    fn test_file_source_reads_estimator_section() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[[estimator.rates]]\njob_type = \"Dev\"\ntask = \"Backend\"\nhours = 5.0\n",
        )
        .unwrap();
        let path = file.path().with_extension("toml");
        std::fs::copy(file.path(), &path).unwrap();

        let source = FileRateSource::new(&path);
        let table = source.load_rate_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rate(JobType::Dev, "Backend").map(|r| r.hours), Some(5.0));
        assert!(source.describe().starts_with("file:"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileRateSource::new("/nonexistent/rates.toml");
        assert!(matches!(source.load_rate_table(), Err(WorkloadError::Config(_))));
    }
}
