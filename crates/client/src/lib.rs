//! Metadata server REST client.
//!
//! This crate provides a type-safe client for the data-manager REST services
//! of a remote metadata server. Every operation validates its parameters
//! locally, composes a JSON request body carrying the external-source
//! provenance, substitutes values into a URL template, issues the call, and
//! unwraps the GUID, element, or element list from the response envelope.

pub mod client;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod rest;
pub mod url_encoding;
pub mod validation;

pub use client::MetadataClient;
pub use client::builder::MetadataClientBuilder;
pub use error::{ClientError, Result};
pub use metadata_config::{BasicCredentials, PagingPolicy};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::*;
pub use rest::requests::ExternalSource;
pub use validation::ParameterValidator;
