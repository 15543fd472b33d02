//! Logging initialization for applications embedding the client.
//!
//! The client itself only emits `tracing` events. Applications that have no
//! subscriber of their own can install one here.
//!
//! # Usage
//!
//! ```rust,no_run
//! use metadata_client::logging::LoggingConfig;
//!
//! LoggingConfig::new()
//!     .with_default_directive("metadata_client=debug")
//!     .with_json(true)
//!     .init()
//!     .expect("logging initialised once");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted for filter directives before the default.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Configuration for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directive used when `RUST_LOG` is unset or invalid
    pub default_directive: String,
    /// Emit one JSON object per event instead of human-readable lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }

    /// Install the subscriber globally.
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let result = if self.json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer()).try_init()
        };
        result.map_err(|e| LoggingError::InitError(e.to_string()))
    }
}

/// Install a human-readable subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> Result<(), LoggingError> {
    LoggingConfig::default().init()
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitError(String),
}
