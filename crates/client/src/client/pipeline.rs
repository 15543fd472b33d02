//! Shared steps behind the façade operations.
//!
//! Each helper validates, composes the request body and invokes the REST
//! call for one operation shape (create, update, remove, link, query...).
//! Façade methods only supply the action name, URL template and the names
//! their parameters are reported under.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::MetadataClient;
use crate::error::Result;
use crate::models::{HasQualifiedName, TemplateProperties};
use crate::rest::requests::{
    ExternalSource, ExternalSourceRequestBody, NameRequestBody, PropertiesRequestBody,
    RelationshipRequestBody, SearchStringRequestBody,
};

/// Parameter name reported for a missing template GUID.
pub(crate) const TEMPLATE_GUID_PARAMETER: &str = "templateGUID";

/// A GUID together with the name it is reported under when invalid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Guid<'a> {
    pub value: &'a str,
    pub parameter: &'a str,
}

pub(crate) const fn guid<'a>(value: &'a str, parameter: &'a str) -> Guid<'a> {
    Guid { value, parameter }
}

impl MetadataClient {
    fn validate_guids(&self, guids: &[Guid<'_>], action: &str) -> Result<()> {
        self.validator.validate_user_id(self.user_id(), action)?;
        for g in guids {
            self.validator.validate_guid(g.value, g.parameter, action)?;
        }
        Ok(())
    }

    /// Create an element under `url_template`, whose extra placeholders are filled by `parents`.
    pub(crate) async fn create_element<P>(
        &self,
        action: &str,
        url_template: &str,
        parents: &[Guid<'_>],
        source: &ExternalSource,
        properties: &P,
    ) -> Result<String>
    where
        P: Serialize + HasQualifiedName,
    {
        self.validate_guids(parents, action)?;
        self.validator.validate_qualified_name(properties, action)?;

        let params: Vec<&str> = parents.iter().map(|g| g.value).collect();
        let body = PropertiesRequestBody::new(source, properties);
        self.invoker
            .post_for_guid(action, url_template, &params, &body)
            .await
    }

    /// Create an element by copying the template element `template_guid`.
    ///
    /// The template GUID fills the placeholder after those filled by `parents`.
    pub(crate) async fn create_from_template(
        &self,
        action: &str,
        url_template: &str,
        parents: &[Guid<'_>],
        source: &ExternalSource,
        template_guid: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.validate_guids(parents, action)?;
        self.validator
            .validate_guid(template_guid, TEMPLATE_GUID_PARAMETER, action)?;
        self.validator.validate_qualified_name(template, action)?;

        let mut params: Vec<&str> = parents.iter().map(|g| g.value).collect();
        params.push(template_guid);
        let body = PropertiesRequestBody::new(source, template);
        self.invoker
            .post_for_guid(action, url_template, &params, &body)
            .await
    }

    /// Update an element. The template's last placeholder receives `isMergeUpdate`.
    pub(crate) async fn update_element<P>(
        &self,
        action: &str,
        url_template: &str,
        element: Guid<'_>,
        is_merge_update: bool,
        source: &ExternalSource,
        properties: &P,
    ) -> Result<()>
    where
        P: Serialize + HasQualifiedName,
    {
        self.validate_guids(&[element], action)?;
        self.validator
            .validate_update_properties(properties, is_merge_update, action)?;

        let merge = if is_merge_update { "true" } else { "false" };
        let body = PropertiesRequestBody::new(source, properties);
        self.invoker
            .post_for_void(action, url_template, &[element.value, merge], &body)
            .await
    }

    /// Post a provenance-only body: removals and relationship clears.
    pub(crate) async fn post_external_source(
        &self,
        action: &str,
        url_template: &str,
        guids: &[Guid<'_>],
        source: &ExternalSource,
    ) -> Result<()> {
        self.validate_guids(guids, action)?;

        let params: Vec<&str> = guids.iter().map(|g| g.value).collect();
        let body = ExternalSourceRequestBody::new(source);
        self.invoker
            .post_for_void(action, url_template, &params, &body)
            .await
    }

    /// Link two elements, optionally describing the relationship.
    pub(crate) async fn link_elements<P: Serialize>(
        &self,
        action: &str,
        url_template: &str,
        guids: &[Guid<'_>],
        source: &ExternalSource,
        properties: Option<&P>,
    ) -> Result<()> {
        self.validate_guids(guids, action)?;

        let params: Vec<&str> = guids.iter().map(|g| g.value).collect();
        let body = RelationshipRequestBody::new(source, properties);
        self.invoker
            .post_for_void(action, url_template, &params, &body)
            .await
    }

    /// Retrieve elements whose properties match a search string.
    pub(crate) async fn find_elements<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        search_string: &str,
        parameter: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<T>> {
        self.validator.validate_user_id(self.user_id(), action)?;
        self.validator
            .validate_search_string(search_string, parameter, action)?;
        let page_size = self.validator.validate_paging(start_from, page_size, action)?;

        let (start_from, page_size) = (start_from.to_string(), page_size.to_string());
        let body = SearchStringRequestBody::new(search_string, parameter);
        self.invoker
            .post_for_elements(
                action,
                url_template,
                &[start_from.as_str(), page_size.as_str()],
                &body,
            )
            .await
    }

    /// Retrieve elements whose name matches exactly.
    pub(crate) async fn get_elements_by_name<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        name: &str,
        parameter: &str,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<T>> {
        self.validator.validate_user_id(self.user_id(), action)?;
        self.validator.validate_name(name, parameter, action)?;
        let page_size = self.validator.validate_paging(start_from, page_size, action)?;

        let (start_from, page_size) = (start_from.to_string(), page_size.to_string());
        let body = NameRequestBody::new(name, parameter);
        self.invoker
            .post_for_elements(
                action,
                url_template,
                &[start_from.as_str(), page_size.as_str()],
                &body,
            )
            .await
    }

    /// Retrieve a page of elements attached to another element.
    pub(crate) async fn get_attached_elements<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        anchor: Guid<'_>,
        start_from: i32,
        page_size: i32,
    ) -> Result<Vec<T>> {
        self.validate_guids(&[anchor], action)?;
        let page_size = self.validator.validate_paging(start_from, page_size, action)?;

        let (start_from, page_size) = (start_from.to_string(), page_size.to_string());
        self.invoker
            .get_for_elements(
                action,
                url_template,
                &[anchor.value, start_from.as_str(), page_size.as_str()],
            )
            .await
    }

    /// Retrieve one element by its unique identifier.
    pub(crate) async fn get_element_by_guid<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        element: Guid<'_>,
    ) -> Result<T> {
        self.validate_guids(&[element], action)?;
        self.invoker
            .get_for_element(action, url_template, &[element.value])
            .await
    }
}
