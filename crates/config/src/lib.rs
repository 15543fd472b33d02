//! Configuration management for the metadata server client.
//!
//! This crate provides types and loaders for the connection, identity and
//! paging settings a [`metadata-client`] instance is built from. Values come
//! from builder setters, environment variables, and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, BasicCredentials, Config, ConnectionConfig, PagingConfig, PagingPolicy};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
