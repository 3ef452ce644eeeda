//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid default quantity: {0}. Must be a positive integer")]
    InvalidDefaultQuantity(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format for command results
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Symbol printed before amounts in table output
    pub currency_symbol: String,
    /// Quantity per delivery when `--quantity` is not given
    pub default_quantity: i64,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output_format: OutputFormat::Table,
            currency_symbol: "₹".to_string(),
            default_quantity: 1,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `DELIVERY_*` environment variable overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(log_level) = std::env::var("DELIVERY_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Ok(format) = std::env::var("DELIVERY_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        if let Ok(symbol) = std::env::var("DELIVERY_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Ok(quantity) = std::env::var("DELIVERY_DEFAULT_QUANTITY") {
            self.default_quantity = quantity
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDefaultQuantity(quantity.clone()))?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_quantity <= 0 {
            return Err(ConfigError::InvalidDefaultQuantity(
                self.default_quantity.to_string(),
            ));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.default_quantity, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
log_level = "debug"
output_format = "json"
currency_symbol = "$"
default_quantity = 2
"#,
        );
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_quantity, 2);
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let file = write_config("currency_symbol = \"Rs.\"\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.currency_symbol, "Rs.");
        assert_eq!(config.default_quantity, 1);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_from_file_rejects_bad_values() {
        let file = write_config("default_quantity = 0\n");
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::InvalidDefaultQuantity(_))
        ));

        let file = write_config("log_level = \"loud\"\n");
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/delivery.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_merge_with_cli() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            config_file: None,
            log_level: Some("trace".to_string()),
            output_format: Some("json".to_string()),
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_with_cli_rejects_unknown_format() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }
}
