//! Connector type API methods for [`MetadataClient`].
//!
//! A connector type describes the connector implementation a connection uses.

use crate::client::MetadataClient;
use crate::client::pipeline::guid;
use crate::error::Result;
use crate::models::{ConnectorTypeElement, ConnectorTypeProperties, TemplateProperties};
use crate::rest::requests::ExternalSource;

const CONNECTOR_TYPES: &str = data_manager_path!("/connector-types");
const FROM_TEMPLATE: &str = data_manager_path!("/connector-types/from-template/{2}");
const UPDATE: &str = data_manager_path!("/connector-types/{2}?isMergeUpdate={3}");
const DELETE: &str = data_manager_path!("/connector-types/{2}/delete");
const BY_SEARCH_STRING: &str =
    data_manager_path!("/connector-types/by-search-string?startFrom={2}&pageSize={3}");
const BY_NAME: &str = data_manager_path!("/connector-types/by-name?startFrom={2}&pageSize={3}");
const BY_GUID: &str = data_manager_path!("/connector-types/{2}");

const CONNECTOR_TYPE_GUID: &str = "connectorTypeGUID";

impl MetadataClient {
    /// Create a new connector type and return its GUID.
    pub async fn create_connector_type(
        &self,
        source: &ExternalSource,
        properties: &ConnectorTypeProperties,
    ) -> Result<String> {
        self.create_element(
            "createConnectorType",
            CONNECTOR_TYPES,
            &[],
            source,
            properties,
        )
        .await
    }

    /// Create a new connector type by copying an existing one.
    pub async fn create_connector_type_from_template(
        &self,
        source: &ExternalSource,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.create_from_template(
            "createConnectorTypeFromTemplate",
            FROM_TEMPLATE,
            &[],
            source,
            template_guid,
            template,
        )
        .await
    }

    /// Update a connector type.
    pub async fn update_connector_type(
        &self,
        source: &ExternalSource,
        connector_type_guid: &str,
        is_merge_update: bool,
        properties: &ConnectorTypeProperties,
    ) -> Result<()> {
        self.update_element(
            "updateConnectorType",
            UPDATE,
            guid(connector_type_guid, CONNECTOR_TYPE_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Remove a connector type.
    pub async fn remove_connector_type(
        &self,
        source: &ExternalSource,
        connector_type_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "removeConnectorType",
            DELETE,
            &[guid(connector_type_guid, CONNECTOR_TYPE_GUID)],
            source,
        )
        .await
    }

    pub async fn find_connector_types(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ConnectorTypeElement>> {
        self.find_elements(
            "findConnectorTypes",
            BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    pub async fn get_connector_types_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ConnectorTypeElement>> {
        self.get_elements_by_name(
            "getConnectorTypesByName",
            BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    pub async fn get_connector_type_by_guid(
        &self,
        connector_type_guid: &str,
    ) -> Result<ConnectorTypeElement> {
        self.get_element_by_guid(
            "getConnectorTypeByGUID",
            BY_GUID,
            guid(connector_type_guid, CONNECTOR_TYPE_GUID),
        )
        .await
    }
}
