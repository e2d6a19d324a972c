//! Application configuration.
//!
//! Handles loading CLI configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::error::{Error, Result};

/// Report output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable per-section summary.
    #[default]
    Text,
    /// Full analysis report as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Default report output format (overridable by CLI flags)
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            output_format: OutputFormat::default(),
        };

        if let Ok(format) = env::var("VERSECRAFT_FORMAT") {
            config.output_format = OutputFormat::parse(&format).ok_or_else(|| {
                Error::config(
                    format!("unrecognized VERSECRAFT_FORMAT value {format:?}"),
                    "Use \"text\" or \"json\"",
                )
            })?;
        }

        Ok(config)
    }
}
