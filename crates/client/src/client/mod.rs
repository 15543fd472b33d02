//! Main metadata server client and its façade operations.
//!
//! This module provides the primary [`MetadataClient`]. Each remote operation
//! is an async method that validates its parameters, composes a request body,
//! expands the operation's URL template and unwraps the response envelope.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `pipeline`: The shared validate/compose/invoke steps (private module)
//! - `connections`: Connections and their links to connector types, endpoints, embedded connections and assets
//! - `connector_types`: Connector type methods
//! - `endpoints`: Endpoint methods
//! - `external_references`: External references and their links to elements
//! - `metadata_sources`: Database managers, event brokers, file systems, applications
//! - `schemas`: Schema types, schema attributes and query targets
//!
//! # What this module does NOT handle:
//! - HTTP transport and error mapping (delegated to [`crate::rest::RestInvoker`])
//! - Parameter rules (delegated to [`crate::validation::ParameterValidator`])
//!
//! # Invariants
//! - Parameters are validated before any request is composed or sent
//! - URL templates are relative to the data manager service root, where `{0}` is the
//!   server name and `{1}` the calling user id

/// Prefix an operation path with the data manager service root.
macro_rules! data_manager_path {
    ($suffix:literal) => {
        concat!(
            "/servers/{0}/open-metadata/access-services/data-manager/users/{1}",
            $suffix
        )
    };
}

pub mod builder;
mod pipeline;

// Façade submodules
mod connections;
mod connector_types;
mod endpoints;
mod external_references;
mod metadata_sources;
mod schemas;

use crate::rest::RestInvoker;
use crate::validation::ParameterValidator;

/// Root of every data manager operation path.
pub const DATA_MANAGER_ROOT: &str = data_manager_path!("");

/// Metadata server client.
///
/// Holds only immutable configuration and a pooled HTTP transport, so it is
/// cheap to clone and safe to share across tasks.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use metadata_client::{ExternalSource, MetadataClient, ConnectionProperties};
///
/// # async fn run() -> metadata_client::Result<()> {
/// let client = MetadataClient::builder()
///     .platform_url("https://localhost:9443")
///     .server_name("cocoMDS1")
///     .user_id("erin")
///     .build()?;
///
/// let props = ConnectionProperties {
///     qualified_name: Some("Connection:orders-db".to_string()),
///     ..Default::default()
/// };
/// let guid = client.create_connection(&ExternalSource::none(), &props).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MetadataClient {
    pub(crate) invoker: RestInvoker,
    pub(crate) validator: ParameterValidator,
}

impl MetadataClient {
    /// Create a new client builder.
    pub fn builder() -> builder::MetadataClientBuilder {
        builder::MetadataClientBuilder::new()
    }

    /// Platform URL root every request is sent to.
    pub fn platform_url(&self) -> &str {
        self.invoker.platform_url()
    }

    /// Name of the metadata server on the platform.
    pub fn server_name(&self) -> &str {
        self.invoker.server_name()
    }

    /// User id every request is issued on behalf of.
    pub fn user_id(&self) -> &str {
        self.invoker.user_id()
    }

    pub fn validator(&self) -> &ParameterValidator {
        &self.validator
    }
}
