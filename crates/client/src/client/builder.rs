//! Client builder for constructing [`MetadataClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (platform URL, server name, user id)
//! - Normalizing the platform URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`MetadataClient`] methods in the façade submodules)
//! - Loading configuration from the environment (handled by `metadata_config::ConfigLoader`)
//!
//! # Invariants
//! - `platform_url`, `server_name` and `user_id` must be provided before calling `build()`
//! - The platform URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::client::MetadataClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::rest::RestInvoker;
use crate::validation::ParameterValidator;
use metadata_config::{
    BasicCredentials, Config, PagingPolicy,
    constants::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

const BUILD_ACTION: &str = "buildClient";

/// Builder for creating a new [`MetadataClient`].
///
/// All options have defaults except the platform URL, server name and user id.
///
/// # Example
///
/// ```rust
/// use metadata_client::{MetadataClient, PagingPolicy};
/// use std::time::Duration;
///
/// let client = MetadataClient::builder()
///     .platform_url("https://localhost:9443")
///     .server_name("cocoMDS1")
///     .user_id("erin")
///     .credentials("erin", "s3cret")
///     .timeout(Duration::from_secs(60))
///     .paging_policy(PagingPolicy::Clamp)
///     .build()
///     .unwrap();
/// assert_eq!(client.server_name(), "cocoMDS1");
/// ```
pub struct MetadataClientBuilder {
    platform_url: Option<String>,
    server_name: Option<String>,
    user_id: Option<String>,
    credentials: Option<BasicCredentials>,
    skip_verify: bool,
    timeout: Duration,
    max_page_size: i32,
    paging_policy: PagingPolicy,
    metrics: Option<MetricsCollector>,
}

impl Default for MetadataClientBuilder {
    fn default() -> Self {
        Self {
            platform_url: None,
            server_name: None,
            user_id: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            paging_policy: PagingPolicy::default(),
            metrics: None,
        }
    }
}

impl MetadataClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform URL root, e.g. `https://localhost:9443`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn platform_url(mut self, url: impl Into<String>) -> Self {
        self.platform_url = Some(url.into());
        self
    }

    /// Set the name of the metadata server hosted on the platform.
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    /// Set the user id every request is issued on behalf of.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Present HTTP basic credentials to the platform on every request.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(BasicCredentials::new(username, password));
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the largest page size a caller may request. `0` disables the limit.
    pub fn max_page_size(mut self, max_page_size: i32) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Set what happens when a caller asks for more than the maximum page size.
    pub fn paging_policy(mut self, policy: PagingPolicy) -> Self {
        self.paging_policy = policy;
        self
    }

    /// Set the metrics collector for call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust
    /// use metadata_client::MetadataClient;
    /// use metadata_config::Config;
    ///
    /// let config = Config::local("cocoMDS1".to_string(), "erin".to_string());
    /// let client = MetadataClient::builder().from_config(&config).build().unwrap();
    /// assert_eq!(client.user_id(), "erin");
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.platform_url = Some(config.connection.platform_url.clone());
        self.server_name = Some(config.connection.server_name.clone());
        self.user_id = Some(config.auth.user_id.clone());
        self.credentials = config.auth.credentials.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_page_size = config.paging.max_page_size;
        self.paging_policy = config.paging.policy;
        self
    }

    /// Normalize a platform URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with operation paths.
    fn normalize_platform_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn required(value: Option<String>, parameter: &str) -> Result<String> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ClientError::invalid_parameter(
                BUILD_ACTION,
                parameter,
                "is required",
            )),
        }
    }

    /// Build the [`MetadataClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidParameter`] if a required setting is missing,
    /// the platform URL is not http(s), or the maximum page size is negative.
    /// Returns [`ClientError::PropertyServerError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<MetadataClient> {
        let platform_url =
            Self::normalize_platform_url(Self::required(self.platform_url, "platformURL")?);
        if !(platform_url.starts_with("https://") || platform_url.starts_with("http://")) {
            return Err(ClientError::invalid_parameter(
                BUILD_ACTION,
                "platformURL",
                format!("must use http or https (got {platform_url})"),
            ));
        }
        let server_name = Self::required(self.server_name, "serverName")?;
        let user_id = Self::required(self.user_id, "userId")?;
        if self.max_page_size < 0 {
            return Err(ClientError::invalid_parameter(
                BUILD_ACTION,
                "maxPageSize",
                format!("must not be negative (got {})", self.max_page_size),
            ));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if platform_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build().map_err(|e| {
            ClientError::property_server(
                BUILD_ACTION,
                None,
                format!("failed to build HTTP client: {e}"),
            )
        })?;

        Ok(MetadataClient {
            invoker: RestInvoker::new(
                http,
                platform_url,
                server_name,
                user_id,
                self.credentials,
                self.metrics,
            ),
            validator: ParameterValidator::new(self.max_page_size, self.paging_policy),
        })
    }
}
