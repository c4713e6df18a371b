//! Configuration management for Logdog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lowest accepted retention threshold in days
pub const MIN_RETENTION_DAYS: u32 = 1;
/// Highest accepted retention threshold in days
pub const MAX_RETENTION_DAYS: u32 = 365;
/// Retention threshold used when none is configured
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// Settings baked into the generated logger package at install time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level the generated logger writes ("DEBUG", "INFO", "WARN", "ERROR")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output directory, relative to the project root
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Number of daily files the generated logger keeps
    #[serde(default = "default_max_files")]
    pub max_files: u32,

    /// Day-granularity layout used in log file names (Go time layout)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_output_dir() -> String {
    "logdog/logs".to_string()
}

fn default_max_files() -> u32 {
    30
}

fn default_date_format() -> String {
    "2006-01-02".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_dir: default_output_dir(),
            max_files: default_max_files(),
            date_format: default_date_format(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial retention threshold for "clear old logs" (default: 7)
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// Override for the global log root (default: ~/logdog)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_root: Option<PathBuf>,

    /// Logger package settings used by install
    #[serde(default)]
    pub logger: LoggerConfig,
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            global_root: None,
            logger: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields defaults. An unreadable or invalid file is logged
    /// and also yields defaults.
    pub fn load() -> Self {
        let path = config_file_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.retention_days = clamp_retention(config.retention_days);
        Ok(config)
    }

    /// The global log root: configured override or ~/logdog
    pub fn global_root(&self) -> Option<PathBuf> {
        self.global_root.clone().or_else(default_global_root)
    }
}

/// Clamp a retention value into the accepted range
pub fn clamp_retention(days: u32) -> u32 {
    days.clamp(MIN_RETENTION_DAYS, MAX_RETENTION_DAYS)
}

/// Default global log root (~/logdog), None when the home dir is unknown
pub fn default_global_root() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join("logdog"))
}

/// Get the base configuration directory (~/.logdog)
/// Falls back to ./.logdog if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| PathBuf::from(".logdog"))
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".logdog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the directory holding logdog's own diagnostic logs
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}
