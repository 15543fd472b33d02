//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: a builder setter applied after `from_env()` overrides the env value.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, MAX_MAX_PAGE_SIZE, MAX_TIMEOUT_SECS};
use crate::types::{
    AuthConfig, BasicCredentials, Config, ConnectionConfig, PagingConfig, PagingPolicy,
};

/// Configuration loader that builds config from environment variables and setters.
#[derive(Default)]
pub struct ConfigLoader {
    platform_url: Option<String>,
    server_name: Option<String>,
    user_id: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_page_size: Option<i32>,
    paging_policy: Option<PagingPolicy>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_platform_url(mut self, url: String) -> Self {
        self.platform_url = Some(url);
        self
    }

    pub fn with_server_name(mut self, server_name: String) -> Self {
        self.server_name = Some(server_name);
        self
    }

    pub fn with_user_id(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set basic credentials for the platform.
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_page_size(mut self, size: i32) -> Self {
        self.max_page_size = Some(size);
        self
    }

    pub fn with_paging_policy(mut self, policy: PagingPolicy) -> Self {
        self.paging_policy = Some(policy);
        self
    }

    pub(crate) fn set_platform_url(&mut self, url: Option<String>) {
        self.platform_url = url;
    }

    pub(crate) fn set_server_name(&mut self, server_name: Option<String>) {
        self.server_name = server_name;
    }

    pub(crate) fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_page_size(&mut self, size: Option<i32>) {
        self.max_page_size = size;
    }

    pub(crate) fn set_paging_policy(&mut self, policy: Option<PagingPolicy>) {
        self.paging_policy = policy;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required value is missing or a value is out of bounds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let platform_url = self.platform_url.ok_or(ConfigError::MissingPlatformUrl)?;
        validate_platform_url(&platform_url)?;
        let server_name = self.server_name.ok_or(ConfigError::MissingServerName)?;
        let user_id = self.user_id.ok_or(ConfigError::MissingUserId)?;

        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(BasicCredentials { username, password }),
            (Some(_), None) => return Err(ConfigError::MissingPassword),
            (None, _) => None,
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_TIMEOUT_SECS,
                    timeout.as_secs()
                ),
            });
        }

        let max_page_size = self.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        if !(0..=MAX_MAX_PAGE_SIZE).contains(&max_page_size) {
            return Err(ConfigError::InvalidMaxPageSize {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_PAGE_SIZE, max_page_size
                ),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                platform_url,
                server_name,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig {
                user_id,
                credentials,
            },
            paging: PagingConfig {
                max_page_size,
                policy: self.paging_policy.unwrap_or_default(),
            },
        })
    }
}

fn validate_platform_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidPlatformUrl {
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidPlatformUrl {
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
