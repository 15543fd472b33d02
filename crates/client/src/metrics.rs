//! Metrics collection for metadata server calls.
//!
//! This module records, for every REST call the client makes:
//! - Request latency histograms
//! - Request counters
//! - Error counters labelled by the kind of failure
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder of your choice)
//! - Alerting or threshold monitoring
//!
//! # Invariants
//! - All metrics use consistent label names: `operation`, `method`, `status`, `error_category`
//! - Metric recording is infallible and never disrupts a call
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "metadata_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "metadata_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "metadata_api_errors_total";

/// Metric name for response decoding failures.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "metadata_api_deserialization_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Parameter rejected locally or by the server
    InvalidParameter,
    /// Caller not permitted to perform the operation
    UserNotAuthorized,
    /// Server, repository or transport failure
    PropertyServerError,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidParameter => "invalid_parameter",
            ErrorCategory::UserNotAuthorized => "user_not_authorized",
            ErrorCategory::PropertyServerError => "property_server_error",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::InvalidParameter { .. } => ErrorCategory::InvalidParameter,
            ClientError::UserNotAuthorized { .. } => ErrorCategory::UserNotAuthorized,
            ClientError::PropertyServerError { .. } => ErrorCategory::PropertyServerError,
        }
    }
}

/// Metrics collector for metadata server calls.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
/// Operations are labelled by their action name (for example `createConnection`)
/// rather than by URL, which would carry GUIDs and explode label cardinality.
///
/// # Example
///
/// ```rust
/// use metadata_client::MetricsCollector;
/// use std::time::Duration;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("createConnection", "POST", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector. Use [`Self::disabled()`] for a no-op one.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a call.
    ///
    /// `status` is `None` when the request failed before any response arrived.
    pub fn record_request_duration(
        &self,
        operation: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "operation" => operation.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, operation: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "operation" => operation.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, operation: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "operation" => operation.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, operation: &str, method: &str, error: &ClientError) {
        self.record_error(operation, method, ErrorCategory::from(error));
    }

    /// Record a response body that could not be decoded.
    ///
    /// `model_type` names the envelope that failed, e.g. "ElementsResponse".
    pub fn record_deserialization_failure(&self, operation: &str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "operation" => operation.to_string(),
            "model_type" => model_type.to_string(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::InvalidParameter.as_str(), "invalid_parameter");
        assert_eq!(ErrorCategory::UserNotAuthorized.as_str(), "user_not_authorized");
        assert_eq!(
            ErrorCategory::PropertyServerError.as_str(),
            "property_server_error"
        );
    }

    #[test]
    fn test_error_categorization() {
        let invalid = ClientError::invalid_parameter("findEndpoints", "searchString", "is blank");
        assert_eq!(ErrorCategory::from(&invalid), ErrorCategory::InvalidParameter);

        let denied = ClientError::UserNotAuthorized {
            action: "createConnection".to_string(),
            user_id: "erin".to_string(),
            message: "denied".to_string(),
        };
        assert_eq!(ErrorCategory::from(&denied), ErrorCategory::UserNotAuthorized);

        let server = ClientError::property_server("getConnectionByGUID", Some(503), "down");
        assert_eq!(ErrorCategory::from(&server), ErrorCategory::PropertyServerError);
    }

    #[test]
    fn test_metrics_collector_disabled() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());

        // None of these should panic
        collector.record_request("createConnection", "POST");
        collector.record_request_duration(
            "createConnection",
            "POST",
            Duration::from_millis(100),
            Some(200),
        );
        collector.record_error("createConnection", "POST", ErrorCategory::InvalidParameter);
        collector.record_deserialization_failure("createConnection", "GuidResponse");
    }

    #[test]
    fn test_metrics_collector_enabled_without_recorder() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());

        // No recorder installed: the macros are no-ops
        collector.record_request("findConnections", "POST");
        collector.record_request_duration("findConnections", "POST", Duration::from_secs(1), None);
        let err = ClientError::property_server("findConnections", None, "connect refused");
        collector.record_client_error("findConnections", "POST", &err);
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(!MetricsCollector::default().is_enabled());
    }
}
