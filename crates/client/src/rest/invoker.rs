//! REST invocation against the metadata server.
//!
//! Responsibilities:
//! - Expand URL templates with the server name, user id and call parameters.
//! - Send the request (with HTTP basic auth when credentials are configured).
//! - Map transport failures, HTTP status codes and failure envelopes onto [`ClientError`].
//! - Record per-operation metrics when a collector is attached.
//!
//! Does NOT handle:
//! - Parameter validation (see [`crate::validation`]).
//! - Request body composition (see [`super::requests`]).
//! - Retries. Every call is attempted exactly once.
//!
//! Invariants:
//! - Placeholder `{0}` is always the server name and `{1}` the user id.
//! - A response is only handed back after its envelope reports success.

use std::time::Instant;

use metadata_config::BasicCredentials;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::responses::{
    ElementResponse, ElementsResponse, GuidResponse, ResponseStatus, RestResponse, VoidResponse,
};
use super::template;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Issues REST calls on behalf of one user against one metadata server.
#[derive(Debug, Clone)]
pub struct RestInvoker {
    http: reqwest::Client,
    platform_url: String,
    server_name: String,
    user_id: String,
    credentials: Option<BasicCredentials>,
    metrics: Option<MetricsCollector>,
}

impl RestInvoker {
    pub(crate) fn new(
        http: reqwest::Client,
        platform_url: String,
        server_name: String,
        user_id: String,
        credentials: Option<BasicCredentials>,
        metrics: Option<MetricsCollector>,
    ) -> Self {
        Self {
            http,
            platform_url,
            server_name,
            user_id,
            credentials,
            metrics,
        }
    }

    pub fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Full request URL for a template and its call parameters (`{2}` onwards).
    pub fn url(&self, url_template: &str, params: &[&str], action: &str) -> Result<String> {
        let mut values = Vec::with_capacity(params.len() + 2);
        values.push(self.server_name.as_str());
        values.push(self.user_id.as_str());
        values.extend_from_slice(params);
        let path = template::expand(url_template, &values, action)?;
        Ok(format!("{}{}", self.platform_url, path))
    }

    /// POST a body and return the GUID of the created element.
    pub async fn post_for_guid<B: Serialize + ?Sized>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
        body: &B,
    ) -> Result<String> {
        let response: GuidResponse = self
            .call(Method::POST, action, url_template, params, Some(body))
            .await?;
        match response.guid {
            Some(guid) if !guid.trim().is_empty() => Ok(guid),
            _ => Err(ClientError::property_server(
                action,
                response.status.related_http_code,
                "server response carried no GUID",
            )),
        }
    }

    /// POST a body where the response carries no payload.
    pub async fn post_for_void<B: Serialize + ?Sized>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
        body: &B,
    ) -> Result<()> {
        let _: VoidResponse = self
            .call(Method::POST, action, url_template, params, Some(body))
            .await?;
        Ok(())
    }

    /// POST a query body and return the matching page of elements.
    pub async fn post_for_elements<T, B>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
        body: &B,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response: ElementsResponse<T> = self
            .call(Method::POST, action, url_template, params, Some(body))
            .await?;
        Ok(response.into_elements())
    }

    /// GET a single element that must exist.
    pub async fn get_for_element<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
    ) -> Result<T> {
        self.get_for_optional_element(action, url_template, params)
            .await?
            .ok_or_else(|| {
                ClientError::property_server(action, None, "server response carried no element")
            })
    }

    /// GET a single element that may legitimately be absent.
    pub async fn get_for_optional_element<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
    ) -> Result<Option<T>> {
        let response: ElementResponse<T> = self
            .call(Method::GET, action, url_template, params, None::<&()>)
            .await?;
        Ok(response.element)
    }

    /// GET a page of elements.
    pub async fn get_for_elements<T: DeserializeOwned>(
        &self,
        action: &str,
        url_template: &str,
        params: &[&str],
    ) -> Result<Vec<T>> {
        let response: ElementsResponse<T> = self
            .call(Method::GET, action, url_template, params, None::<&()>)
            .await?;
        Ok(response.into_elements())
    }

    async fn call<R, B>(
        &self,
        method: Method,
        action: &str,
        url_template: &str,
        params: &[&str],
        body: Option<&B>,
    ) -> Result<R>
    where
        R: DeserializeOwned + RestResponse,
        B: Serialize + ?Sized,
    {
        let url = self.url(url_template, params, action)?;
        if let Some(metrics) = &self.metrics {
            metrics.record_request(action, method.as_str());
        }

        let started = Instant::now();
        let (status, result) = self.execute(&method, action, &url, body).await;

        if let Some(metrics) = &self.metrics {
            metrics.record_request_duration(action, method.as_str(), started.elapsed(), status);
            if let Err(e) = &result {
                metrics.record_client_error(action, method.as_str(), e);
            }
        }
        result
    }

    async fn execute<R, B>(
        &self,
        method: &Method,
        action: &str,
        url: &str,
        body: Option<&B>,
    ) -> (Option<u16>, Result<R>)
    where
        R: DeserializeOwned + RestResponse,
        B: Serialize + ?Sized,
    {
        debug!(action, %method, url, "Calling metadata server");

        let mut builder = self.http.request(method.clone(), url);
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            );
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(action, error = %e, "Request to metadata server failed");
                return (
                    None,
                    Err(ClientError::property_server(
                        action,
                        None,
                        format!("request to {url} failed: {e}"),
                    )),
                );
            }
        };

        let code = response.status().as_u16();
        let success = response.status().is_success();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return (
                    Some(code),
                    Err(ClientError::property_server(
                        action,
                        Some(code),
                        format!("could not read response body: {e}"),
                    )),
                );
            }
        };

        if !success {
            warn!(action, status = code, "Metadata server returned failure status");
            return (Some(code), Err(self.status_error(action, code, &text)));
        }

        (Some(code), self.decode(action, code, &text))
    }

    fn decode<R>(&self, action: &str, code: u16, text: &str) -> Result<R>
    where
        R: DeserializeOwned + RestResponse,
    {
        let text = if text.trim().is_empty() { "{}" } else { text };
        let response: R = serde_json::from_str(text).map_err(|e| {
            if let Some(metrics) = &self.metrics {
                metrics.record_deserialization_failure(action, short_type_name::<R>());
            }
            ClientError::property_server(
                action,
                Some(code),
                format!("could not decode server response: {e}"),
            )
        })?;

        if let Some(err) = response.status().to_error(action, &self.user_id) {
            warn!(action, error = %err, "Metadata server reported failure");
            return Err(err);
        }
        Ok(response)
    }

    /// Error for a non-2xx response, using the failure envelope when the body has one.
    fn status_error(&self, action: &str, code: u16, text: &str) -> ClientError {
        let mut status: ResponseStatus = serde_json::from_str(text).unwrap_or_default();
        if status.exception_error_message.is_none() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                status.exception_error_message = Some(trimmed.to_string());
            }
        }
        status.error_for(action, &self.user_id, code)
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
