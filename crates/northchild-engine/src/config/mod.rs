use crate::fate::AssetLayout;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assets: AssetLayout,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("NORTHCHILD_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = AssetLayout::default();
        let root = match env::var("NORTHCHILD_RESULTS_ROOT") {
            Ok(value) => parse_results_root(&value)?,
            Err(_) => defaults.root,
        };
        let extension = match env::var("NORTHCHILD_RESULTS_EXT") {
            Ok(value) => parse_extension(&value)?,
            Err(_) => defaults.extension,
        };

        let log_level = env::var("NORTHCHILD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            assets: AssetLayout { root, extension },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_results_root(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed.split('/').any(|segment| segment.is_empty()) {
        return Err(ConfigError::InvalidResultsRoot {
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_extension(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidAssetExtension {
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidResultsRoot { value: String },
    InvalidAssetExtension { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResultsRoot { value } => write!(
                f,
                "NORTHCHILD_RESULTS_ROOT must be a non-empty path without empty segments (got '{}')",
                value
            ),
            ConfigError::InvalidAssetExtension { value } => write!(
                f,
                "NORTHCHILD_RESULTS_EXT must be an alphanumeric file extension (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
