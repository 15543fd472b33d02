//! Identity and credential types.
//!
//! Responsibilities:
//! - Define the user id every request is issued on behalf of.
//! - Hold optional HTTP basic credentials for the platform.
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` so they never reach `Debug` output or logs.
//! - Serialization includes the password for host config persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// HTTP basic credentials presented to the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicCredentials {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// User id substituted into every request URL.
    pub user_id: String,
    /// Optional platform credentials, sent as HTTP basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BasicCredentials>,
}
