//! Data models for metadata elements and their relationships.
//!
//! All entities are plain property bags. Properties structs are what callers
//! send; element structs pair those properties with the [`ElementHeader`]
//! the server attaches on retrieval.
//!
//! # Submodules
//! - [`common`]: Element header, element type/origin/versions, the [`HasQualifiedName`] trait
//! - [`connections`]: Connection properties and elements
//! - [`connector_types`]: Connector type properties and elements
//! - [`endpoints`]: Endpoint properties and elements
//! - [`external_references`]: External reference properties and elements
//! - [`metadata_sources`]: Database managers, event brokers, file systems, applications
//! - [`relationships`]: Properties carried by link requests
//! - [`schemas`]: Schema types (with variants) and schema attributes
//! - [`templates`]: Properties for create-from-template calls

pub mod common;
pub mod connections;
pub mod connector_types;
pub mod endpoints;
pub mod external_references;
pub mod metadata_sources;
pub mod relationships;
pub mod schemas;
pub mod templates;

pub use common::{
    ElementHeader, ElementOrigin, ElementOriginCategory, ElementStatus, ElementType,
    ElementVersions, HasQualifiedName,
};
pub use connections::{ConnectionElement, ConnectionProperties};
pub use connector_types::{ConnectorTypeElement, ConnectorTypeProperties};
pub use endpoints::{EndpointElement, EndpointProperties};
pub use external_references::{ExternalReferenceElement, ExternalReferenceProperties};
pub use metadata_sources::{
    ApplicationProperties, DatabaseManagerProperties, EventBrokerProperties,
    FileSystemProperties, MetadataSourceProperties,
};
pub use relationships::{
    AssetConnectionProperties, EmbeddedConnectionProperties, ExternalReferenceLinkProperties,
    QueryTargetProperties,
};
pub use schemas::{
    SchemaAttributeElement, SchemaAttributeProperties, SchemaTypeElement, SchemaTypeProperties,
    SchemaTypeVariant,
};
pub use templates::TemplateProperties;
