//! Configuration loader
//!
//! Loads application configuration from a file, then applies environment
//! overrides. Without any file the built-in defaults are used.
//!
//! ## Loading Strategy
//! 1. Loads `.env` from the working directory (or a parent), if present
//! 2. Uses the file named by `WORKLOAD_CONFIG` when set
//! 3. Otherwise searches several paths for config files
//! 4. Falls back to [`Config::default`] when nothing is found
//! 5. Applies environment overrides
//!
//! ## Environment Variables
//! - `WORKLOAD_CONFIG`: Path to a config file (must exist)
//! - `WORKLOAD_LOG_LEVEL`: Log level or filter directive
//! - `WORKLOAD_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./workload.toml` or `./workload.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use workload_domain::constants::{ENV_CONFIG_PATH, ENV_LOG_JSON, ENV_LOG_LEVEL};
use workload_domain::{Config, Result, WorkloadError};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["workload.toml", "workload.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `WorkloadError::Config` if:
/// - `WORKLOAD_CONFIG` names a file that does not exist
/// - The config file cannot be read or parsed
/// - An environment override has an invalid value
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let mut config = match env_var(ENV_CONFIG_PATH) {
        Some(path) => load_from_file(Some(PathBuf::from(path)))?,
        None => match find_config_file() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::info!("No config file found, using built-in defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches several locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`find_config_file`].
///
/// # Errors
/// Returns `WorkloadError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WorkloadError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            WorkloadError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WorkloadError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Apply `WORKLOAD_LOG_LEVEL` and `WORKLOAD_LOG_JSON` on top of `config`
///
/// # Errors
/// Returns `WorkloadError::Config` if `WORKLOAD_LOG_JSON` is not a boolean.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        tracing::debug!(level = %level, "Log level overridden by environment");
        config.logging.level = level;
    }
    if let Some(json) = env_bool(ENV_LOG_JSON)? {
        config.logging.json = json;
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `WorkloadError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WorkloadError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WorkloadError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WorkloadError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search several paths for a configuration file
///
/// Searches the current working directory, its parent and grandparent, then
/// the executable's directory and its parent and grandparent.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            bases.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    bases
        .iter()
        .flat_map(|base| CONFIG_FILE_NAMES.iter().map(move |name| base.join(name)))
        .find(|path| path.is_file())
}

/// Non-blank environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Errors
/// Returns `WorkloadError::Config` for any other value.
fn env_bool(key: &str) -> Result<Option<bool>> {
    let Some(value) = env_var(key) else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(WorkloadError::Config(format!("Invalid boolean for {}: {}", key, other))),
    }
}
