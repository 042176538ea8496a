//! Logging utilities module
//!
//! This module initializes the tracing subscriber: an stdout layer plus an
//! optional append-only file layer, so every leveled, timestamped entry also
//! lands in the configured log file.

use crate::config::app_config::LoggingConfig;
use crate::shared::error::AppError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(config: &LoggingConfig) -> crate::Result<()> {
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

        let stdout_layer = fmt::layer().with_target(false).with_ansi(false);

        let registry = tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer);

        match &config.file_path {
            Some(path) if !path.is_empty() => {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        AppError::Config(format!("Failed to open log file {}: {}", path, e))
                    })?;

                let file_layer = fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file));

                registry.with(file_layer).try_init().map_err(|e| {
                    AppError::Internal(format!("Failed to initialize logging: {}", e))
                })?;
            }
            _ => {
                registry.try_init().map_err(|e| {
                    AppError::Internal(format!("Failed to initialize logging: {}", e))
                })?;
            }
        }

        Ok(())
    }
}
