//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `METADATA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::PagingPolicy;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("METADATA_PLATFORM_URL") {
        loader.set_platform_url(Some(url));
    }
    if let Some(server) = env_var_or_none("METADATA_SERVER_NAME") {
        loader.set_server_name(Some(server));
    }
    if let Some(user_id) = env_var_or_none("METADATA_USER_ID") {
        loader.set_user_id(Some(user_id));
    }
    if let Some(username) = env_var_or_none("METADATA_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("METADATA_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none("METADATA_SKIP_VERIFY") {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "METADATA_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("METADATA_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "METADATA_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = env_var_or_none("METADATA_MAX_PAGE_SIZE") {
        loader.set_max_page_size(Some(size.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "METADATA_MAX_PAGE_SIZE".to_string(),
                message: "must be an integer".to_string(),
            }
        })?));
    }
    if let Some(policy) = env_var_or_none("METADATA_PAGING_POLICY") {
        let policy: PagingPolicy =
            policy
                .parse()
                .map_err(|message: String| ConfigError::InvalidValue {
                    var: "METADATA_PAGING_POLICY".to_string(),
                    message,
                })?;
        loader.set_paging_policy(Some(policy));
    }

    Ok(())
}
