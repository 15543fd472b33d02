//! Connection configuration types.
//!
//! Responsibilities:
//! - Define where the metadata server lives (platform URL root + server name).
//! - Define the main `Config` structure combining connection, auth and paging.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env/.env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_PLATFORM_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, BasicCredentials};
use crate::types::paging::PagingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the metadata server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Platform URL root (e.g., https://localhost:9443)
    pub platform_url: String,
    /// Name of the metadata server hosted on the platform
    pub server_name: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

impl Config {
    /// Create a config for the given platform, server and user with default settings.
    pub fn new(platform_url: String, server_name: String, user_id: String) -> Self {
        Self {
            connection: ConnectionConfig {
                platform_url,
                server_name,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                user_id,
                credentials: None,
            },
            paging: PagingConfig::default(),
        }
    }

    /// Create a config that also presents basic credentials to the platform.
    pub fn with_credentials(
        platform_url: String,
        server_name: String,
        user_id: String,
        credentials: BasicCredentials,
    ) -> Self {
        let mut config = Self::new(platform_url, server_name, user_id);
        config.auth.credentials = Some(credentials);
        config
    }

    /// Development configuration pointing at a local platform.
    pub fn local(server_name: String, user_id: String) -> Self {
        Self::new(
            format!("https://localhost:{}", DEFAULT_PLATFORM_PORT),
            server_name,
            user_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::paging::PagingPolicy;

    #[test]
    fn test_local_config_uses_default_port() {
        let config = Config::local("active-metadata-store".to_string(), "erin".to_string());
        assert_eq!(config.connection.platform_url, "https://localhost:9443");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.paging.policy, PagingPolicy::Reject);
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::new(
            "https://meta.example.com".to_string(),
            "cocoMDS1".to_string(),
            "erin".to_string(),
        );
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["connection"]["timeout"], 30);

        let back: Config = serde_json::from_value(value).unwrap();
        assert_eq!(back.connection.timeout, Duration::from_secs(30));
        assert_eq!(back.connection.server_name, "cocoMDS1");
    }

    #[test]
    fn test_paging_section_optional() {
        let json = r#"{
            "connection": {"platform_url": "https://h:9443", "server_name": "s", "timeout": 5},
            "auth": {"user_id": "u"}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.connection.skip_verify);
        assert_eq!(config.paging, PagingConfig::default());
    }
}
