//! Connection models.
//!
//! A connection describes how to reach and open an asset: it links to a
//! connector type (the code that does the work) and an endpoint (the network
//! address), and may embed further connections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{ElementHeader, impl_has_qualified_name};

/// Properties of a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub secured_properties: Option<HashMap<String, String>>,
    pub configuration_properties: Option<HashMap<String, Value>>,
    pub user_id: Option<String>,
    pub encrypted_password: Option<String>,
    pub clear_password: Option<String>,
}

/// A connection as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub connection_properties: ConnectionProperties,
}

impl_has_qualified_name!(ConnectionProperties);
