use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::config::{EnvironmentProvider, SystemEnvironment};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
    pub app_log_retention_days: usize,
}

impl LoggingConfig {
    /// Load logging configuration through the given environment provider
    pub fn from_env_provider(env_provider: &(dyn EnvironmentProvider + Send + Sync)) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .unwrap_or_else(|| "INFO".to_string());

        let app_log_file = env_provider.get_var("APP_LOG_FILE").map(PathBuf::from);

        let app_log_retention_days = env_provider
            .get_var("APP_LOG_RETENTION_DAYS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        Self {
            log_level,
            app_log_file,
            app_log_retention_days,
        }
    }

    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_env_provider(&SystemEnvironment)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
pub fn init_logging(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env_provider(env_provider.as_ref());

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        let file_appender = daily_appender(log_file_path, config.app_log_retention_days)?;

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

/// Daily-rotated appender keeping at most `retention_days` files
fn daily_appender(log_file_path: &Path, retention_days: usize) -> Result<RollingFileAppender, LoggingError> {
    let directory = log_file_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = log_file_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(retention_days.max(1))
        .build(directory)
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_env_provider(&MockEnvironment::empty());

        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
        assert_eq!(config.app_log_retention_days, 7);
    }

    #[test]
    fn test_logging_config_from_vars() {
        let env = MockEnvironment::empty()
            .with_var("LOG_LEVEL", "debug,sqlx=warn")
            .with_var("APP_LOG_FILE", "logs/itembook.log")
            .with_var("APP_LOG_RETENTION_DAYS", "14");

        let config = LoggingConfig::from_env_provider(&env);

        assert_eq!(config.log_level, "debug,sqlx=warn");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/itembook.log")));
        assert_eq!(config.app_log_retention_days, 14);
    }

    #[test]
    fn test_invalid_retention_falls_back_to_default() {
        let env = MockEnvironment::empty().with_var("APP_LOG_RETENTION_DAYS", "forever");

        assert_eq!(LoggingConfig::from_env_provider(&env).app_log_retention_days, 7);
    }
}
