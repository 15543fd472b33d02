//! Types shared by every metadata element model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Properties that carry the element's unique natural key.
pub trait HasQualifiedName {
    fn qualified_name(&self) -> Option<&str>;
}

/// Implements [`HasQualifiedName`] for structs with a `qualified_name: Option<String>` field.
macro_rules! impl_has_qualified_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::common::HasQualifiedName for $ty {
                fn qualified_name(&self) -> Option<&str> {
                    self.qualified_name.as_deref()
                }
            }
        )+
    };
}
pub(crate) use impl_has_qualified_name;

/// Lifecycle status of a stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementStatus {
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    ApprovedConcept,
    UnderDevelopment,
    DevelopmentComplete,
    ApprovedForDeployment,
    StandBy,
    Active,
    Failed,
    Disabled,
    Complete,
    Deprecated,
    Other,
    Deleted,
    /// Status the client does not recognise.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_else(|| "UNKNOWN".to_string());
        f.write_str(&label)
    }
}

/// Where an element's authoritative copy lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementOriginCategory {
    LocalCohort,
    ExportArchive,
    ContentPack,
    DeregisteredRepository,
    Configuration,
    ExternalSource,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Open metadata type of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementType {
    pub type_id: Option<String>,
    pub type_name: Option<String>,
    #[serde(default)]
    pub super_type_names: Vec<String>,
    pub type_version: Option<i64>,
    pub type_description: Option<String>,
}

/// Provenance of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOrigin {
    pub source_server: Option<String>,
    #[serde(default)]
    pub origin_category: ElementOriginCategory,
    pub home_metadata_collection_id: Option<String>,
    pub home_metadata_collection_name: Option<String>,
    pub license: Option<String>,
}

/// Audit fields maintained by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVersions {
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub maintained_by: Vec<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}

/// Header the server attaches to every element it returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHeader {
    pub guid: String,
    #[serde(rename = "type", default)]
    pub element_type: ElementType,
    #[serde(default)]
    pub origin: ElementOrigin,
    #[serde(default)]
    pub versions: ElementVersions,
    #[serde(default)]
    pub status: ElementStatus,
}

impl ElementHeader {
    /// Open metadata type name, when the server supplied one.
    pub fn type_name(&self) -> Option<&str> {
        self.element_type.type_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_deserializes_server_shape() {
        let header: ElementHeader = serde_json::from_value(json!({
            "class": "ElementHeader",
            "guid": "1c4b8a9e",
            "type": {"typeName": "Connection", "superTypeNames": ["Referenceable"]},
            "origin": {"sourceServer": "cocoMDS1", "originCategory": "LOCAL_COHORT"},
            "versions": {"createdBy": "erin", "createTime": "2024-03-01T10:15:00Z", "version": 3},
            "status": "ACTIVE"
        }))
        .unwrap();

        assert_eq!(header.guid, "1c4b8a9e");
        assert_eq!(header.type_name(), Some("Connection"));
        assert_eq!(header.element_type.super_type_names, vec!["Referenceable"]);
        assert_eq!(header.origin.origin_category, ElementOriginCategory::LocalCohort);
        assert_eq!(header.versions.version, 3);
        assert!(header.versions.create_time.is_some());
        assert_eq!(header.status, ElementStatus::Active);
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let status: ElementStatus = serde_json::from_value(json!("QUARANTINED")).unwrap();
        assert_eq!(status, ElementStatus::Unknown);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ElementStatus::ApprovedConcept.to_string(), "APPROVED_CONCEPT");
        assert_eq!(ElementStatus::Active.to_string(), "ACTIVE");
    }

    #[test]
    fn test_minimal_header() {
        let header: ElementHeader = serde_json::from_value(json!({"guid": "g"})).unwrap();
        assert_eq!(header.type_name(), None);
        assert_eq!(header.status, ElementStatus::Unknown);
    }
}
