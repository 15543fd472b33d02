//! Metadata source models.
//!
//! A metadata source is the software capability on whose behalf changes are
//! made: a database manager, event broker, file system or application. Its
//! GUID and qualified name become the external-source provenance of later
//! requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::HasQualifiedName;

/// Properties shared by every metadata source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSourceProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub deployed_implementation_type: Option<String>,
    pub version: Option<String>,
    pub patch_level: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseManagerProperties {
    #[serde(flatten)]
    pub source: MetadataSourceProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBrokerProperties {
    #[serde(flatten)]
    pub source: MetadataSourceProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemProperties {
    #[serde(flatten)]
    pub source: MetadataSourceProperties,
    pub format: Option<String>,
    pub encryption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationProperties {
    #[serde(flatten)]
    pub source: MetadataSourceProperties,
    pub app_type: Option<String>,
}

impl HasQualifiedName for MetadataSourceProperties {
    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

macro_rules! delegate_qualified_name {
    ($($ty:ty),+) => {
        $(
            impl HasQualifiedName for $ty {
                fn qualified_name(&self) -> Option<&str> {
                    self.source.qualified_name()
                }
            }
        )+
    };
}

delegate_qualified_name!(
    DatabaseManagerProperties,
    EventBrokerProperties,
    FileSystemProperties,
    ApplicationProperties
);
