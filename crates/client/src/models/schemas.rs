//! Schema models.
//!
//! A schema type describes the structure of data; schema attributes are its
//! named, ordered fields. Schema types come in several variants, told apart
//! on the wire by their `class` discriminator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::common::{ElementHeader, impl_has_qualified_name};

/// Discriminator field naming the schema type variant.
const CLASS_FIELD: &str = "class";

/// Class assumed when the server omits the discriminator.
const BASIC_CLASS: &str = "SchemaTypeProperties";

/// Variant-specific part of a schema type.
///
/// A missing `class` decodes as [`SchemaTypeVariant::Basic`] and an
/// unrecognised one as [`SchemaTypeVariant::Other`], so a single unfamiliar
/// element never fails a whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(remote = "Self", tag = "class", rename_all_fields = "camelCase")]
pub enum SchemaTypeVariant {
    /// A schema type with no variant-specific properties.
    #[default]
    #[serde(rename = "SchemaTypeProperties")]
    Basic,
    /// A single value of a primitive data type.
    #[serde(rename = "PrimitiveSchemaTypeProperties")]
    Primitive {
        data_type: Option<String>,
        default_value: Option<String>,
    },
    /// A fixed value.
    #[serde(rename = "LiteralSchemaTypeProperties")]
    Literal {
        data_type: Option<String>,
        fixed_value: Option<String>,
    },
    /// A value drawn from a valid-values set.
    #[serde(rename = "EnumSchemaTypeProperties")]
    Enum {
        data_type: Option<String>,
        default_value: Option<String>,
        #[serde(rename = "validValueSetGUID")]
        valid_value_set_guid: Option<String>,
    },
    /// A structure of nested schema attributes.
    #[serde(rename = "StructSchemaTypeProperties")]
    Struct,
    /// One of several alternative schema types.
    #[serde(rename = "SchemaTypeChoiceProperties")]
    Choice {
        #[serde(default)]
        schema_options: Vec<SchemaTypeProperties>,
    },
    /// A map from one schema type to another.
    #[serde(rename = "MapSchemaTypeProperties")]
    Map {
        map_from_element: Option<Box<SchemaTypeProperties>>,
        map_to_element: Option<Box<SchemaTypeProperties>>,
    },
    /// A variant this client does not model. Sent back as a basic schema type.
    #[serde(other)]
    Other,
}

impl Serialize for SchemaTypeVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Other => SchemaTypeVariant::serialize(&Self::Basic, serializer),
            variant => SchemaTypeVariant::serialize(variant, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaTypeVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        if !matches!(fields.get(CLASS_FIELD), Some(Value::String(_))) {
            fields.insert(CLASS_FIELD.to_string(), Value::String(BASIC_CLASS.to_string()));
        }
        SchemaTypeVariant::deserialize(Value::Object(fields)).map_err(de::Error::custom)
    }
}

impl SchemaTypeVariant {
    /// Open metadata type name implied by the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Basic | Self::Other => "SchemaType",
            Self::Primitive { .. } => "PrimitiveSchemaType",
            Self::Literal { .. } => "LiteralSchemaType",
            Self::Enum { .. } => "EnumSchemaType",
            Self::Struct => "StructSchemaType",
            Self::Choice { .. } => "SchemaTypeChoice",
            Self::Map { .. } => "MapSchemaType",
        }
    }
}

/// Properties of a schema type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTypeProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version_number: Option<String>,
    pub author: Option<String>,
    pub usage: Option<String>,
    pub encoding_standard: Option<String>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub formula: Option<String>,
    pub queries: Option<Vec<String>>,
    #[serde(flatten)]
    pub variant: SchemaTypeVariant,
}

/// Properties of a schema attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAttributeProperties {
    pub qualified_name: Option<String>,
    pub additional_properties: Option<HashMap<String, String>>,
    pub type_name: Option<String>,
    pub extended_properties: Option<HashMap<String, Value>>,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub element_position: i32,
    #[serde(default)]
    pub min_cardinality: i32,
    #[serde(default)]
    pub max_cardinality: i32,
    #[serde(default)]
    pub allows_duplicate_values: bool,
    #[serde(default)]
    pub ordered_values: bool,
    pub default_value_override: Option<String>,
    pub sort_order: Option<String>,
    #[serde(default)]
    pub minimum_length: i32,
    #[serde(default)]
    pub length: i32,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub is_nullable: bool,
    pub native_class: Option<String>,
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub formula: Option<String>,
    pub queries: Option<Vec<String>>,
    /// Inline schema type, created alongside the attribute.
    pub schema_type: Option<SchemaTypeProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTypeElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub schema_type_properties: SchemaTypeProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAttributeElement {
    pub element_header: ElementHeader,
    #[serde(default)]
    pub schema_attribute_properties: SchemaAttributeProperties,
}

impl_has_qualified_name!(SchemaTypeProperties, SchemaAttributeProperties);
