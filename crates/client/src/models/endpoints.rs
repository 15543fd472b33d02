//! Endpoint models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{ElementHeader, impl_has_qualified_name};

/// Properties of an endpoint: the network address a connection reaches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub protocol: Option<String>,
    pub encryption_method: Option<String>,
}

/// An endpoint as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub endpoint_properties: EndpointProperties,
}

impl_has_qualified_name!(EndpointProperties);
