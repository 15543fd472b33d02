//! Connector type models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{ElementHeader, impl_has_qualified_name};

/// Properties of a connector type: the implementation a connection opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorTypeProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub supported_asset_type_name: Option<String>,
    pub expected_data_format: Option<String>,
    pub connector_provider_class_name: Option<String>,
    pub connector_framework_name: Option<String>,
    pub connector_interface_language: Option<String>,
    pub connector_interfaces: Option<Vec<String>>,
    pub target_technology_source: Option<String>,
    pub target_technology_name: Option<String>,
    pub target_technology_interfaces: Option<Vec<String>>,
    pub target_technology_versions: Option<Vec<String>>,
    pub recognized_additional_properties: Option<Vec<String>>,
    pub recognized_configuration_properties: Option<Vec<String>>,
    pub recognized_secured_properties: Option<Vec<String>>,
}

/// A connector type as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorTypeElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub connector_type_properties: ConnectorTypeProperties,
}

impl_has_qualified_name!(ConnectorTypeProperties);
