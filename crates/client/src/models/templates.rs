//! Properties for creating an element by copying a template element.

use serde::{Deserialize, Serialize};

use super::common::impl_has_qualified_name;

/// Values that override the template's when the copy is made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    pub qualified_name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub network_address: Option<String>,
    pub version_identifier: Option<String>,
}

impl_has_qualified_name!(TemplateProperties);
