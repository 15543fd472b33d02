//! Schema API methods for [`MetadataClient`].
//!
//! # What this module handles:
//! - Schema types, including attaching a schema type to its parent element
//! - Schema attributes nested under a schema type or another attribute
//! - Query targets linking derived schema elements to the elements they query
//!
//! URL templates here follow the conventions the other element kinds use:
//! parent identifiers come before the child's in the path.
//!
//! # Invariants
//! - A parent element is identified by its GUID together with its type name,
//!   since the server resolves the relationship type from the parent's type.

use crate::client::MetadataClient;
use crate::client::pipeline::guid;
use crate::error::Result;
use crate::models::{
    QueryTargetProperties, SchemaAttributeElement, SchemaAttributeProperties, SchemaTypeElement,
    SchemaTypeProperties, TemplateProperties,
};
use crate::rest::requests::ExternalSource;

const SCHEMA_TYPES: &str = data_manager_path!("/schema-types");
const SCHEMA_TYPE_FROM_TEMPLATE: &str = data_manager_path!("/schema-types/from-template/{2}");
const SCHEMA_TYPE_UPDATE: &str = data_manager_path!("/schema-types/{2}?isMergeUpdate={3}");
const SCHEMA_TYPE_PARENT: &str = data_manager_path!("/parents/{2}/{3}/schema-types/{4}");
const SCHEMA_TYPE_PARENT_DELETE: &str =
    data_manager_path!("/parents/{2}/{3}/schema-types/{4}/delete");
const SCHEMA_TYPE_DELETE: &str = data_manager_path!("/schema-types/{2}/delete");
const SCHEMA_TYPE_BY_SEARCH_STRING: &str =
    data_manager_path!("/schema-types/by-search-string?startFrom={2}&pageSize={3}");
const SCHEMA_TYPE_BY_NAME: &str =
    data_manager_path!("/schema-types/by-name?startFrom={2}&pageSize={3}");
const SCHEMA_TYPE_FOR_ELEMENT: &str = data_manager_path!("/parents/{2}/{3}/schema-types");
const SCHEMA_TYPE_BY_GUID: &str = data_manager_path!("/schema-types/{2}");

const SCHEMA_ATTRIBUTES: &str = data_manager_path!("/schema-elements/{2}/schema-attributes");
const SCHEMA_ATTRIBUTE_FROM_TEMPLATE: &str =
    data_manager_path!("/schema-elements/{2}/schema-attributes/from-template/{3}");
const SCHEMA_ATTRIBUTE_UPDATE: &str =
    data_manager_path!("/schema-attributes/{2}?isMergeUpdate={3}");
const SCHEMA_ATTRIBUTE_DELETE: &str = data_manager_path!("/schema-attributes/{2}/delete");
const SCHEMA_ATTRIBUTE_BY_SEARCH_STRING: &str =
    data_manager_path!("/schema-attributes/by-search-string?startFrom={2}&pageSize={3}");
const NESTED_SCHEMA_ATTRIBUTES: &str = data_manager_path!(
    "/schema-elements/{2}/nested-schema-attributes?startFrom={3}&pageSize={4}"
);
const SCHEMA_ATTRIBUTE_BY_NAME: &str =
    data_manager_path!("/schema-attributes/by-name?startFrom={2}&pageSize={3}");
const SCHEMA_ATTRIBUTE_BY_GUID: &str = data_manager_path!("/schema-attributes/{2}");

const QUERY_TARGET: &str = data_manager_path!("/schema-elements/{2}/query-targets/{3}");
const QUERY_TARGET_DELETE: &str =
    data_manager_path!("/schema-elements/{2}/query-targets/{3}/delete");

const SCHEMA_TYPE_GUID: &str = "schemaTypeGUID";
const SCHEMA_ATTRIBUTE_GUID: &str = "schemaAttributeGUID";
const SCHEMA_ELEMENT_GUID: &str = "schemaElementGUID";
const PARENT_ELEMENT_GUID: &str = "parentElementGUID";
const PARENT_ELEMENT_TYPE_NAME: &str = "parentElementTypeName";

impl MetadataClient {
    // ---- Schema types ----

    /// Create a new schema type and return its GUID.
    ///
    /// The variant in `properties` selects which kind of schema type is created.
    pub async fn create_schema_type(
        &self,
        source: &ExternalSource,
        properties: &SchemaTypeProperties,
    ) -> Result<String> {
        self.create_element("createSchemaType", SCHEMA_TYPES, &[], source, properties)
            .await
    }

    /// Create a schema type by copying an existing one.
    pub async fn create_schema_type_from_template(
        &self,
        source: &ExternalSource,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.create_from_template(
            "createSchemaTypeFromTemplate",
            SCHEMA_TYPE_FROM_TEMPLATE,
            &[],
            source,
            template_guid,
            template,
        )
        .await
    }

    /// Update a schema type. A replace update must carry the qualified name.
    pub async fn update_schema_type(
        &self,
        source: &ExternalSource,
        schema_type_guid: &str,
        is_merge_update: bool,
        properties: &SchemaTypeProperties,
    ) -> Result<()> {
        self.update_element(
            "updateSchemaType",
            SCHEMA_TYPE_UPDATE,
            guid(schema_type_guid, SCHEMA_TYPE_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Attach a schema type to the element it describes (an asset, port or process).
    pub async fn setup_schema_type_parent(
        &self,
        source: &ExternalSource,
        schema_type_guid: &str,
        parent_element_guid: &str,
        parent_element_type_name: &str,
    ) -> Result<()> {
        self.link_elements(
            "setupSchemaTypeParent",
            SCHEMA_TYPE_PARENT,
            &[
                guid(parent_element_guid, PARENT_ELEMENT_GUID),
                guid(parent_element_type_name, PARENT_ELEMENT_TYPE_NAME),
                guid(schema_type_guid, SCHEMA_TYPE_GUID),
            ],
            source,
            None::<&()>,
        )
        .await
    }

    /// Detach a schema type from its parent element.
    pub async fn clear_schema_type_parent(
        &self,
        source: &ExternalSource,
        schema_type_guid: &str,
        parent_element_guid: &str,
        parent_element_type_name: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearSchemaTypeParent",
            SCHEMA_TYPE_PARENT_DELETE,
            &[
                guid(parent_element_guid, PARENT_ELEMENT_GUID),
                guid(parent_element_type_name, PARENT_ELEMENT_TYPE_NAME),
                guid(schema_type_guid, SCHEMA_TYPE_GUID),
            ],
            source,
        )
        .await
    }

    /// Remove a schema type and the schema attributes nested within it.
    pub async fn remove_schema_type(
        &self,
        source: &ExternalSource,
        schema_type_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "removeSchemaType",
            SCHEMA_TYPE_DELETE,
            &[guid(schema_type_guid, SCHEMA_TYPE_GUID)],
            source,
        )
        .await
    }

    /// Retrieve schema types whose properties match a search string.
    pub async fn find_schema_types(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<SchemaTypeElement>> {
        self.find_elements(
            "findSchemaTypes",
            SCHEMA_TYPE_BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve schema types with the given name.
    pub async fn get_schema_types_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<SchemaTypeElement>> {
        self.get_elements_by_name(
            "getSchemaTypesByName",
            SCHEMA_TYPE_BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve the schema type attached to an element, if it has one.
    pub async fn get_schema_type_for_element(
        &self,
        parent_element_guid: &str,
        parent_element_type_name: &str,
    ) -> Result<Option<SchemaTypeElement>> {
        const ACTION: &str = "getSchemaTypeForElement";

        self.validator.validate_user_id(self.user_id(), ACTION)?;
        self.validator
            .validate_guid(parent_element_guid, PARENT_ELEMENT_GUID, ACTION)?;
        self.validator
            .validate_name(parent_element_type_name, PARENT_ELEMENT_TYPE_NAME, ACTION)?;

        self.invoker
            .get_for_optional_element(
                ACTION,
                SCHEMA_TYPE_FOR_ELEMENT,
                &[parent_element_guid, parent_element_type_name],
            )
            .await
    }

    /// Retrieve a schema type by its GUID.
    pub async fn get_schema_type_by_guid(
        &self,
        schema_type_guid: &str,
    ) -> Result<SchemaTypeElement> {
        self.get_element_by_guid(
            "getSchemaTypeByGUID",
            SCHEMA_TYPE_BY_GUID,
            guid(schema_type_guid, SCHEMA_TYPE_GUID),
        )
        .await
    }

    // ---- Schema attributes ----

    /// Create a schema attribute nested under `schema_element_guid` and return its GUID.
    ///
    /// A schema type supplied inline in `properties` is created alongside it.
    pub async fn create_schema_attribute(
        &self,
        source: &ExternalSource,
        schema_element_guid: &str,
        properties: &SchemaAttributeProperties,
    ) -> Result<String> {
        self.create_element(
            "createSchemaAttribute",
            SCHEMA_ATTRIBUTES,
            &[guid(schema_element_guid, SCHEMA_ELEMENT_GUID)],
            source,
            properties,
        )
        .await
    }

    /// Create a schema attribute under a schema element by copying an existing attribute.
    pub async fn create_schema_attribute_from_template(
        &self,
        source: &ExternalSource,
        schema_element_guid: &str,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.create_from_template(
            "createSchemaAttributeFromTemplate",
            SCHEMA_ATTRIBUTE_FROM_TEMPLATE,
            &[guid(schema_element_guid, SCHEMA_ELEMENT_GUID)],
            source,
            template_guid,
            template,
        )
        .await
    }

    /// Update a schema attribute. A replace update must carry the qualified name.
    pub async fn update_schema_attribute(
        &self,
        source: &ExternalSource,
        schema_attribute_guid: &str,
        is_merge_update: bool,
        properties: &SchemaAttributeProperties,
    ) -> Result<()> {
        self.update_element(
            "updateSchemaAttribute",
            SCHEMA_ATTRIBUTE_UPDATE,
            guid(schema_attribute_guid, SCHEMA_ATTRIBUTE_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Remove a schema attribute.
    pub async fn remove_schema_attribute(
        &self,
        source: &ExternalSource,
        schema_attribute_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "removeSchemaAttribute",
            SCHEMA_ATTRIBUTE_DELETE,
            &[guid(schema_attribute_guid, SCHEMA_ATTRIBUTE_GUID)],
            source,
        )
        .await
    }

    /// Retrieve schema attributes whose properties match a search string.
    pub async fn find_schema_attributes(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<SchemaAttributeElement>> {
        self.find_elements(
            "findSchemaAttributes",
            SCHEMA_ATTRIBUTE_BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve the schema attributes nested directly under a schema element.
    pub async fn get_nested_schema_attributes(
        &self,
        schema_element_guid: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<SchemaAttributeElement>> {
        self.get_attached_elements(
            "getNestedSchemaAttributes",
            NESTED_SCHEMA_ATTRIBUTES,
            guid(schema_element_guid, SCHEMA_ELEMENT_GUID),
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve schema attributes with the given name.
    pub async fn get_schema_attributes_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<SchemaAttributeElement>> {
        self.get_elements_by_name(
            "getSchemaAttributesByName",
            SCHEMA_ATTRIBUTE_BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve a schema attribute by its GUID.
    pub async fn get_schema_attribute_by_guid(
        &self,
        schema_attribute_guid: &str,
    ) -> Result<SchemaAttributeElement> {
        self.get_element_by_guid(
            "getSchemaAttributeByGUID",
            SCHEMA_ATTRIBUTE_BY_GUID,
            guid(schema_attribute_guid, SCHEMA_ATTRIBUTE_GUID),
        )
        .await
    }

    // ---- Derived values ----

    /// Record that a derived schema element takes its value from a query on another element.
    pub async fn setup_query_target(
        &self,
        source: &ExternalSource,
        derived_element_guid: &str,
        query_target_guid: &str,
        properties: Option<&QueryTargetProperties>,
    ) -> Result<()> {
        self.link_elements(
            "setupQueryTarget",
            QUERY_TARGET,
            &[
                guid(derived_element_guid, "derivedElementGUID"),
                guid(query_target_guid, "queryTargetGUID"),
            ],
            source,
            properties,
        )
        .await
    }

    /// Remove the query target link between a derived schema element and its source.
    pub async fn clear_query_target(
        &self,
        source: &ExternalSource,
        derived_element_guid: &str,
        query_target_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearQueryTarget",
            QUERY_TARGET_DELETE,
            &[
                guid(derived_element_guid, "derivedElementGUID"),
                guid(query_target_guid, "queryTargetGUID"),
            ],
            source,
        )
        .await
    }
}
