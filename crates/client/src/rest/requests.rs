//! Request bodies.
//!
//! Every mutating request names the external source (third-party system) on
//! whose behalf the change is made. Bodies are immutable once composed: the
//! fields are private and only readable through accessors.

use serde::{Deserialize, Serialize};

/// The GUID/name pair identifying the system a change is made on behalf of.
///
/// Both halves are optional; an empty source means the change is made by the
/// calling user directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSource {
    #[serde(rename = "externalSourceGUID")]
    pub guid: Option<String>,
    #[serde(rename = "externalSourceName")]
    pub name: Option<String>,
}

impl ExternalSource {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            name: Some(name.into()),
        }
    }

    /// No external source: the change is attributed to the calling user.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.guid.is_none() && self.name.is_none()
    }
}

/// Provenance only: used by removals and relationship clears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSourceRequestBody {
    #[serde(flatten)]
    external_source: ExternalSource,
}

impl ExternalSourceRequestBody {
    pub fn new(external_source: &ExternalSource) -> Self {
        Self {
            external_source: external_source.clone(),
        }
    }

    pub fn external_source(&self) -> &ExternalSource {
        &self.external_source
    }
}

/// Provenance plus element properties: used by creates and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesRequestBody<P> {
    #[serde(flatten)]
    external_source: ExternalSource,
    element_properties: P,
}

/// Provenance plus template overrides: used by create-from-template calls.
pub type TemplateRequestBody = PropertiesRequestBody<crate::models::TemplateProperties>;

impl<P> PropertiesRequestBody<P> {
    pub fn new(external_source: &ExternalSource, properties: P) -> Self {
        Self {
            external_source: external_source.clone(),
            element_properties: properties,
        }
    }

    pub fn external_source(&self) -> &ExternalSource {
        &self.external_source
    }

    pub fn properties(&self) -> &P {
        &self.element_properties
    }

    pub fn into_properties(self) -> P {
        self.element_properties
    }
}

/// Provenance plus optional relationship properties: used by link setups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRequestBody<P> {
    #[serde(flatten)]
    external_source: ExternalSource,
    properties: Option<P>,
}

impl<P> RelationshipRequestBody<P> {
    pub fn new(external_source: &ExternalSource, properties: Option<P>) -> Self {
        Self {
            external_source: external_source.clone(),
            properties,
        }
    }

    pub fn external_source(&self) -> &ExternalSource {
        &self.external_source
    }

    pub fn properties(&self) -> Option<&P> {
        self.properties.as_ref()
    }
}

/// A name to match exactly, with the parameter name used in server-side errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequestBody {
    name: String,
    name_parameter_name: String,
}

impl NameRequestBody {
    pub fn new(name: &str, parameter_name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_parameter_name: parameter_name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A search string (regular expression), with the parameter name used in server-side errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStringRequestBody {
    search_string: String,
    search_string_parameter_name: String,
}

impl SearchStringRequestBody {
    pub fn new(search_string: &str, parameter_name: &str) -> Self {
        Self {
            search_string: search_string.to_string(),
            search_string_parameter_name: parameter_name.to_string(),
        }
    }

    pub fn search_string(&self) -> &str {
        &self.search_string
    }
}
