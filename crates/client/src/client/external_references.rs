//! External reference API methods for [`MetadataClient`].
//!
//! External references point at documents, standards and web pages that
//! describe a metadata element. They live independently of the elements
//! they are linked to, so removing an element leaves its references intact.

use crate::client::MetadataClient;
use crate::client::pipeline::guid;
use crate::error::Result;
use crate::models::{
    ExternalReferenceElement, ExternalReferenceLinkProperties, ExternalReferenceProperties,
};
use crate::rest::requests::ExternalSource;

const EXTERNAL_REFERENCES: &str = data_manager_path!("/external-references");
const UPDATE: &str = data_manager_path!("/external-references/{2}?isMergeUpdate={3}");
const LINK: &str = data_manager_path!("/related-elements/{2}/external-references/{3}");
const UNLINK: &str = data_manager_path!("/related-elements/{2}/external-references/{3}/delete");
const DELETE: &str = data_manager_path!("/external-references/{2}/delete");
const BY_SEARCH_STRING: &str =
    data_manager_path!("/external-references/by-search-string?startFrom={2}&pageSize={3}");
const BY_NAME: &str =
    data_manager_path!("/external-references/by-name?startFrom={2}&pageSize={3}");
const ATTACHED: &str =
    data_manager_path!("/elements/{2}/external-references?startFrom={3}&pageSize={4}");
const BY_GUID: &str = data_manager_path!("/external-references/{2}");

const EXTERNAL_REFERENCE_GUID: &str = "externalReferenceGUID";

impl MetadataClient {
    /// Create a new external reference and return its GUID.
    pub async fn create_external_reference(
        &self,
        source: &ExternalSource,
        properties: &ExternalReferenceProperties,
    ) -> Result<String> {
        self.create_element(
            "createExternalReference",
            EXTERNAL_REFERENCES,
            &[],
            source,
            properties,
        )
        .await
    }

    pub async fn update_external_reference(
        &self,
        source: &ExternalSource,
        external_reference_guid: &str,
        is_merge_update: bool,
        properties: &ExternalReferenceProperties,
    ) -> Result<()> {
        self.update_element(
            "updateExternalReference",
            UPDATE,
            guid(external_reference_guid, EXTERNAL_REFERENCE_GUID),
            is_merge_update,
            source,
            properties,
        )
        .await
    }

    /// Attach an external reference to the element it describes.
    pub async fn link_external_reference_to_element(
        &self,
        source: &ExternalSource,
        element_guid: &str,
        external_reference_guid: &str,
        properties: Option<&ExternalReferenceLinkProperties>,
    ) -> Result<()> {
        self.link_elements(
            "linkExternalReferenceToElement",
            LINK,
            &[
                guid(element_guid, "attachedToGUID"),
                guid(external_reference_guid, EXTERNAL_REFERENCE_GUID),
            ],
            source,
            properties,
        )
        .await
    }

    pub async fn unlink_external_reference_from_element(
        &self,
        source: &ExternalSource,
        element_guid: &str,
        external_reference_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "unlinkExternalReferenceFromElement",
            UNLINK,
            &[
                guid(element_guid, "attachedToGUID"),
                guid(external_reference_guid, EXTERNAL_REFERENCE_GUID),
            ],
            source,
        )
        .await
    }

    pub async fn remove_external_reference(
        &self,
        source: &ExternalSource,
        external_reference_guid: &str,
    ) -> Result<()> {
        self.post_external_source(
            "removeExternalReference",
            DELETE,
            &[guid(external_reference_guid, EXTERNAL_REFERENCE_GUID)],
            source,
        )
        .await
    }

    pub async fn find_external_references(
        &self,
        search_string: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ExternalReferenceElement>> {
        self.find_elements(
            "findExternalReferences",
            BY_SEARCH_STRING,
            search_string,
            "searchString",
            start_from,
            page_size,
        )
        .await
    }

    pub async fn get_external_references_by_name(
        &self,
        name: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ExternalReferenceElement>> {
        self.get_elements_by_name(
            "getExternalReferencesByName",
            BY_NAME,
            name,
            "name",
            start_from,
            page_size,
        )
        .await
    }

    /// Retrieve the external references attached to an element.
    pub async fn get_attached_external_references(
        &self,
        element_guid: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<ExternalReferenceElement>> {
        self.get_attached_elements(
            "getAttachedExternalReferences",
            ATTACHED,
            guid(element_guid, "elementGUID"),
            start_from,
            page_size,
        )
        .await
    }

    pub async fn get_external_reference_by_guid(
        &self,
        external_reference_guid: &str,
    ) -> Result<ExternalReferenceElement> {
        self.get_element_by_guid(
            "getExternalReferenceByGUID",
            BY_GUID,
            guid(external_reference_guid, EXTERNAL_REFERENCE_GUID),
        )
        .await
    }
}
