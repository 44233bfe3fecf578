//! Configuration management for txpager
//!
//! This module handles loading, validation, and management of
//! txpager configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigErrorSeverity};

/// Largest page size accepted from configuration
pub const MAX_RECORDS_PER_PAGE: usize = 500;

/// Smallest refresh interval accepted from configuration
pub const MIN_REFRESH_INTERVAL_MS: u64 = 100;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON file with the initial transaction records
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Records per page for lists
    #[serde(default = "default_records_per_page")]
    pub records_per_page: usize,
    /// Canonical ordering of the transaction list
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            records_per_page: default_records_per_page(),
            sort_direction: SortDirection::default(),
        }
    }
}

fn default_records_per_page() -> usize {
    10
}

/// Sort direction enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first
    #[serde(alias = "ascending")]
    Asc,
    /// Newest first
    #[serde(alias = "descending")]
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Periodic refresh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Poll the record source in the background
    #[serde(default = "default_true")]
    pub enable: bool,
    /// Poll interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enable: true,
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    5000
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code appended to display amounts
    #[serde(default = "default_currency")]
    pub code: String,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: default_currency(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_thousands_sep() -> String {
    " ".to_string()
}

fn default_decimal_sep() -> String {
    ".".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Refresh settings
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Unreadable {
            path: path.to_string_lossy().to_string(),
            reason: err.to_string(),
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|err| ConfigError::InvalidYaml { reason: err.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.pagination.records_per_page == 0
            || self.pagination.records_per_page > MAX_RECORDS_PER_PAGE
        {
            return Err(ConfigError::InvalidValue {
                field: "pagination.records_per_page".to_string(),
                reason: format!("Records per page must be between 1 and {}", MAX_RECORDS_PER_PAGE),
            });
        }

        if self.refresh.interval_ms < MIN_REFRESH_INTERVAL_MS {
            return Err(ConfigError::InvalidValue {
                field: "refresh.interval_ms".to_string(),
                reason: format!("Refresh interval must be at least {} ms", MIN_REFRESH_INTERVAL_MS),
            });
        }

        if self.currency.thousands_separator.is_empty() || self.currency.decimal_separator.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Currency separators cannot be empty".to_string(),
            });
        }

        if self.currency.thousands_separator == self.currency.decimal_separator {
            return Err(ConfigError::ValidationError {
                message: "Thousands and decimal separators must differ".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorCode;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pagination.records_per_page, 10);
        assert_eq!(config.pagination.sort_direction, SortDirection::Desc);
        assert_eq!(config.refresh.interval_ms, 5000);
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn test_bundled_template_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.pagination.records_per_page, 10);
        assert!(config.refresh.enable);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("pagination:\n  records_per_page: 25\n").unwrap();
        assert_eq!(config.pagination.records_per_page, 25);
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.currency.code, "USD");
    }

    #[test]
    fn test_sort_direction_aliases() {
        let config = Config::from_yaml("pagination:\n  sort_direction: ascending\n").unwrap();
        assert_eq!(config.pagination.sort_direction, SortDirection::Asc);

        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(" asc ".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml("server: [unterminated").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidYaml);
        assert_eq!(err.severity(), ConfigErrorSeverity::Error);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_yaml("pagination:\n  records_per_page: 0\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
        assert!(err.to_string().contains("pagination.records_per_page"));
    }

    #[test]
    fn test_refresh_interval_floor() {
        let mut config = Config::default();
        config.refresh.interval_ms = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_separators_must_differ() {
        let mut config = Config::default();
        config.currency.decimal_separator = " ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::ValidationError);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::FileNotFound);
        assert_eq!(err.severity(), ConfigErrorSeverity::Warning);
    }
}
