//! Properties carried by relationship (link) requests.
//!
//! The two related elements are identified in the request URL; these
//! structs hold the optional properties of the relationship itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties of a connection nested inside a virtual connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedConnectionProperties {
    pub position: i32,
    pub display_name: Option<String>,
    pub arguments: Option<HashMap<String, String>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
}

/// Properties of the link between an asset and a connection to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConnectionProperties {
    pub asset_summary: Option<String>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
}

/// Properties of the link between an element and an external reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReferenceLinkProperties {
    pub link_id: Option<String>,
    pub link_description: Option<String>,
    pub pages: Option<String>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
}

/// Properties of the link between a derived schema element and the element it queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTargetProperties {
    pub query_id: Option<String>,
    pub query: Option<String>,
    pub query_type: Option<String>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
}
