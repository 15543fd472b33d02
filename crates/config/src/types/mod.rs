//! Configuration types for the metadata client.
//!
//! Responsibilities:
//! - Group connection, identity and paging settings into one [`Config`].
//! - Provide serde support so configurations can be embedded in host config files.
//!
//! Does NOT handle:
//! - Loading values from the environment (see the `loader` module).
//! - Any network activity (see the client crate).

mod auth;
mod connection;
mod paging;

pub use auth::{AuthConfig, BasicCredentials};
pub use connection::{Config, ConnectionConfig};
pub use paging::{PagingConfig, PagingPolicy};
