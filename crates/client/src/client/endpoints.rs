//! Endpoint API methods for [`MetadataClient`].
//!
//! # What this module handles:
//! - Creating, updating and removing endpoints
//! - Finding endpoints by search string, name or network address
//!
//! # What this module does NOT handle:
//! - Linking endpoints to connections (see `connections`)

use crate::client::MetadataClient;
use crate::client::pipeline::guid;
use crate::error::Result;
use crate::models::{EndpointElement, EndpointProperties, TemplateProperties};
use crate::rest::requests::ExternalSource;

const ENDPOINTS: &str = data_manager_path!("/endpoints");
const FROM_TEMPLATE: &str = data_manager_path!("/endpoints/from-template/{2}");
const UPDATE: &str = data_manager_path!("/endpoints/{2}?isMergeUpdate={3}");
const DELETE: &str = data_manager_path!("/endpoints/{2}/delete");
const BY_SEARCH_STRING: &str =
    data_manager_path!("/endpoints/by-search-string?startFrom={2}&pageSize={3}");
const BY_NAME: &str = data_manager_path!("/endpoints/by-name?startFrom={2}&pageSize={3}");
const BY_NETWORK_ADDRESS: &str =
    data_manager_path!("/endpoints/by-network-address?startFrom={2}&pageSize={3}");
const BY_GUID: &str = data_manager_path!("/endpoints/{2}");

const ENDPOINT_GUID: &str = "endpointGUID";

impl MetadataClient {
    /// Create a new endpoint and return its GUID.
    pub async fn create_endpoint(
        &self,
        source: &ExternalSource,
        properties: &EndpointProperties,
    ) -> Result<String> {
        self.create_element("createEndpoint", ENDPOINTS, &[], source, properties)
            .await
    }

    /// Create a new endpoint by copying an existing one.
    ///
    /// The template's `network_address` replaces the copied address.
    pub async fn create_endpoint_from_template(
        &self,
        source: &ExternalSource,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.create_from_template(
            "createEndpointFromTemplate",
            FROM_TEMPLATE,
            &[],
            source,
            template_guid,
            template,
        )
        .await
    }

    /// Update an endpoint.
    pub async fn update_endpoint(
        &self,
        source: &ExternalSource,
        endpoint_guid: &str,
        is_merge_update: bool,
        properties: &EndpointProperties,
    ) -> Result<()> {
        self.update_element(
            "updateEndpoint",
            UPDATE,
            guid(endpoint_guid, ENDPOINT_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Remove an endpoint.
    pub async fn remove_endpoint(&self, source: &ExternalSource, endpoint_guid: &str) -> Result<()> {
        self.post_external_source(
            "removeEndpoint",
            DELETE,
            &[guid(endpoint_guid, ENDPOINT_GUID)],
            source,
        )
        .await
    }

    /// Find endpoints whose properties match the search string (a regular expression).
    pub async fn find_endpoints(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<EndpointElement>> {
        self.find_elements(
            "findEndpoints",
            BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve endpoints with the given name.
    pub async fn get_endpoints_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<EndpointElement>> {
        self.get_elements_by_name(
            "getEndpointsByName",
            BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve endpoints that reach the given network address.
    pub async fn get_endpoints_by_network_address(
        &self,
        network_address: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<EndpointElement>> {
        self.get_elements_by_name(
            "getEndpointsByNetworkAddress",
            BY_NETWORK_ADDRESS,
            network_address,
            "networkAddress",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve an endpoint by its unique identifier.
    pub async fn get_endpoint_by_guid(&self, endpoint_guid: &str) -> Result<EndpointElement> {
        self.get_element_by_guid(
            "getEndpointByGUID",
            BY_GUID,
            guid(endpoint_guid, ENDPOINT_GUID),
        )
        .await
    }
}
