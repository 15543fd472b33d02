//! External reference models: links to documents, standards and websites
//! that describe a metadata element.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{ElementHeader, impl_has_qualified_name};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReferenceProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub reference_title: Option<String>,
    pub reference_abstract: Option<String>,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    pub number_of_pages: Option<i32>,
    pub page_range: Option<String>,
    pub publication_series: Option<String>,
    pub publication_series_volume: Option<String>,
    pub publisher: Option<String>,
    pub edition: Option<String>,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub publication_date: Option<DateTime<Utc>>,
    pub publication_city: Option<String>,
    pub publication_year: Option<String>,
    pub publication_numbers: Option<Vec<String>>,
    pub license: Option<String>,
    pub copyright: Option<String>,
    pub attribution: Option<String>,
    pub url: Option<String>,
    pub reference_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReferenceElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub external_reference_properties: ExternalReferenceProperties,
}

impl_has_qualified_name!(ExternalReferenceProperties);
