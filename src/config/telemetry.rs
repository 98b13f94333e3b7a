//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging configuration for hosts embedding the pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format; derived from the environment when unset
    pub log_format: Option<LogFormat>,
}

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl TelemetryConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Format to use: explicit setting, else pretty in development and JSON elsewhere
    pub fn effective_format(&self) -> LogFormat {
        self.log_format.unwrap_or(match self.environment {
            Environment::Development => LogFormat::Pretty,
            Environment::Staging | Environment::Production => LogFormat::Json,
        })
    }

    /// Build the env filter from `log_level`
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("telemetry.log_level"));
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the filter is invalid or a global subscriber
    /// has already been installed.
    pub fn init_tracing(&self) -> Result<(), ConfigError> {
        let builder = tracing_subscriber::fmt().with_env_filter(self.env_filter()?);

        let installed = match self.effective_format() {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };

        installed.map_err(|e| ConfigError::TelemetryInit(e.to_string()))
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_format: None,
        }
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,iunoia_core=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info,iunoia_core=debug");
        assert!(config.log_format.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_effective_format_follows_environment() {
        let mut config = TelemetryConfig::default();
        assert_eq!(config.effective_format(), LogFormat::Pretty);

        config.environment = Environment::Production;
        assert_eq!(config.effective_format(), LogFormat::Json);

        config.log_format = Some(LogFormat::Pretty);
        assert_eq!(config.effective_format(), LogFormat::Pretty);
    }

    #[test]
    fn test_validate_accepts_default_filter() {
        assert!(TelemetryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_filter() {
        let config = TelemetryConfig {
            log_level: "  ".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("telemetry.log_level"))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_filter() {
        let config = TelemetryConfig {
            log_level: "iunoia_core=loud".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }

    #[test]
    fn test_init_tracing_twice_returns_error() {
        let config = TelemetryConfig::default();
        let _ = config.init_tracing();
        assert!(matches!(
            config.init_tracing(),
            Err(ConfigError::TelemetryInit(_))
        ));
    }

    #[test]
    fn test_telemetry_config_deserialization() {
        let json = r#"{
            "environment": "staging",
            "log_level": "warn",
            "log_format": "json"
        }"#;

        let config: TelemetryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, Some(LogFormat::Json));
    }
}
