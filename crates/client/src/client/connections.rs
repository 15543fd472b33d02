//! Connection API methods for [`MetadataClient`].
//!
//! # What this module handles:
//! - Creating, updating and removing connections
//! - Linking connections to connector types, endpoints, embedded connections and assets
//! - Finding and retrieving connections
//!
//! # What this module does NOT handle:
//! - Connector types and endpoints themselves (see `connector_types` and `endpoints`)

use crate::client::MetadataClient;
use crate::client::pipeline::guid;
use crate::error::Result;
use crate::models::{
    AssetConnectionProperties, ConnectionElement, ConnectionProperties,
    EmbeddedConnectionProperties, TemplateProperties,
};
use crate::rest::requests::ExternalSource;

const CONNECTIONS: &str = data_manager_path!("/connections");
const FROM_TEMPLATE: &str = data_manager_path!("/connections/from-template/{2}");
const UPDATE: &str = data_manager_path!("/connections/{2}?isMergeUpdate={3}");
const CONNECTOR_TYPE: &str = data_manager_path!("/connections/{2}/connector-types/{3}");
const CONNECTOR_TYPE_DELETE: &str =
    data_manager_path!("/connections/{2}/connector-types/{3}/delete");
const ENDPOINT: &str = data_manager_path!("/connections/{2}/endpoints/{3}");
const ENDPOINT_DELETE: &str = data_manager_path!("/connections/{2}/endpoints/{3}/delete");
const EMBEDDED: &str = data_manager_path!("/connections/{2}/embedded-connections/{3}");
const EMBEDDED_DELETE: &str =
    data_manager_path!("/connections/{2}/embedded-connections/{3}/delete");
const ASSET: &str = data_manager_path!("/assets/{2}/connections/{3}");
const ASSET_DELETE: &str = data_manager_path!("/assets/{2}/connections/{3}/delete");
const DELETE: &str = data_manager_path!("/connections/{2}/delete");
const BY_SEARCH_STRING: &str =
    data_manager_path!("/connections/by-search-string?startFrom={2}&pageSize={3}");
const BY_NAME: &str = data_manager_path!("/connections/by-name?startFrom={2}&pageSize={3}");
const BY_GUID: &str = data_manager_path!("/connections/{2}");

const CONNECTION_GUID: &str = "connectionGUID";

impl MetadataClient {
    /// Create a new connection and return its GUID.
    pub async fn create_connection(
        &self,
        source: &ExternalSource,
        properties: &ConnectionProperties,
    ) -> Result<String> {
        self.create_element("createConnection", CONNECTIONS, &[], source, properties)
            .await
    }

    /// Create a new connection by copying an existing one.
    pub async fn create_connection_from_template(
        &self,
        source: &ExternalSource,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.create_from_template(
            "createConnectionFromTemplate",
            FROM_TEMPLATE,
            &[],
            source,
            template_guid,
            template,
        )
        .await
    }

    /// Update a connection. With `is_merge_update` false, unset properties are cleared.
    pub async fn update_connection(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        is_merge_update: bool,
        properties: &ConnectionProperties,
    ) -> Result<()> {
        self.update_element(
            "updateConnection",
            UPDATE,
            guid(connection_guid, CONNECTION_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Link a connection to the connector type that implements it.
    pub async fn setup_connector_type(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        connector_type_guid: &str,
    ) -> Result<()> {
        self.link_elements(
            "setupConnectorType",
            CONNECTOR_TYPE,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(connector_type_guid, "connectorTypeGUID"),
            ],
            source,
            None::<&()>,
        )
        .await
    }

    /// Remove the link between a connection and its connector type.
    pub async fn clear_connector_type(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        connector_type_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearConnectorType",
            CONNECTOR_TYPE_DELETE,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(connector_type_guid, "connectorTypeGUID"),
            ],
            source,
        )
        .await
    }

    /// Link a connection to the endpoint it reaches.
    pub async fn setup_endpoint(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        endpoint_guid: &str,
    ) -> Result<()> {
        self.link_elements(
            "setupEndpoint",
            ENDPOINT,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(endpoint_guid, "endpointGUID"),
            ],
            source,
            None::<&()>,
        )
        .await
    }

    /// Remove the link between a connection and its endpoint.
    pub async fn clear_endpoint(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        endpoint_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearEndpoint",
            ENDPOINT_DELETE,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(endpoint_guid, "endpointGUID"),
            ],
            source,
        )
        .await
    }

    /// Embed one connection inside a virtual connection.
    pub async fn setup_embedded_connection(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        embedded_connection_guid: &str,
        properties: Option<&EmbeddedConnectionProperties>,
    ) -> Result<()> {
        self.link_elements(
            "setupEmbeddedConnection",
            EMBEDDED,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(embedded_connection_guid, "embeddedConnectionGUID"),
            ],
            source,
            properties,
        )
        .await
    }

    /// Remove an embedded connection from a virtual connection.
    pub async fn clear_embedded_connection(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
        embedded_connection_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearEmbeddedConnection",
            EMBEDDED_DELETE,
            &[
                guid(connection_guid, CONNECTION_GUID),
                guid(embedded_connection_guid, "embeddedConnectionGUID"),
            ],
            source,
        )
        .await
    }

    /// Link an asset to the connection used to access it.
    pub async fn setup_asset_connection(
        &self,
        source: &ExternalSource,
        asset_guid: &str,
        connection_guid: &str,
        properties: Option<&AssetConnectionProperties>,
    ) -> Result<()> {
        self.link_elements(
            "setupAssetConnection",
            ASSET,
            &[
                guid(asset_guid, "assetGUID"),
                guid(connection_guid, CONNECTION_GUID),
            ],
            source,
            properties,
        )
        .await
    }

    /// Remove the link between an asset and a connection.
    pub async fn clear_asset_connection(
        &self,
        source: &ExternalSource,
        asset_guid: &str,
        connection_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "clearAssetConnection",
            ASSET_DELETE,
            &[
                guid(asset_guid, "assetGUID"),
                guid(connection_guid, CONNECTION_GUID),
            ],
            source,
        )
        .await
    }

    /// Remove a connection.
    pub async fn remove_connection(
        &self,
        source: &ExternalSource,
        connection_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "removeConnection",
            DELETE,
            &[guid(connection_guid, CONNECTION_GUID)],
            source,
        )
        .await
    }

    /// Find connections whose properties match the search string (a regular expression).
    pub async fn find_connections(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ConnectionElement>> {
        self.find_elements(
            "findConnections",
            BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve connections with the given name.
    pub async fn get_connections_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ConnectionElement>> {
        self.get_elements_by_name(
            "getConnectionsByName",
            BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve a connection by its unique identifier.
    pub async fn get_connection_by_guid(&self, connection_guid: &str) -> Result<ConnectionElement> {
        self.get_element_by_guid(
            "getConnectionByGUID",
            BY_GUID,
            guid(connection_guid, CONNECTION_GUID),
        )
        .await
    }
}
