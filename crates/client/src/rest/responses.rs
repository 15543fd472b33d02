//! Response envelopes.
//!
//! Every response carries the server's error-reporting fields alongside its
//! payload. A server may answer HTTP 200 and still report a failure in the
//! envelope, so each envelope is checked with [`ResponseStatus::to_error`]
//! before its payload is used.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ClientError;

/// Error-reporting fields shared by all envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    #[serde(rename = "relatedHTTPCode")]
    pub related_http_code: Option<u16>,
    pub exception_class_name: Option<String>,
    pub exception_error_message: Option<String>,
    pub exception_error_message_id: Option<String>,
    pub exception_system_action: Option<String>,
    pub exception_user_action: Option<String>,
    pub action_description: Option<String>,
    pub exception_properties: Option<HashMap<String, Value>>,
}

/// Kind of failure a response reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    InvalidParameter,
    UserNotAuthorized,
    PropertyServer,
}

impl FailureKind {
    /// Classify by exception class name first, then by HTTP code.
    pub(crate) fn classify(class_name: Option<&str>, http_code: u16) -> Self {
        if let Some(class) = class_name {
            if class.ends_with("InvalidParameterException") {
                return Self::InvalidParameter;
            }
            if class.ends_with("UserNotAuthorizedException") {
                return Self::UserNotAuthorized;
            }
            if class.ends_with("PropertyServerException") {
                return Self::PropertyServer;
            }
        }
        match http_code {
            400 => Self::InvalidParameter,
            401 | 403 => Self::UserNotAuthorized,
            _ => Self::PropertyServer,
        }
    }
}

impl ResponseStatus {
    /// Whether the envelope reports a failure.
    pub fn is_failure(&self) -> bool {
        self.exception_class_name.is_some()
            || self.related_http_code.is_some_and(|code| code != 200)
    }

    /// Convert a failure report into a [`ClientError`], or `None` on success.
    pub fn to_error(&self, action: &str, user_id: &str) -> Option<ClientError> {
        if !self.is_failure() {
            return None;
        }
        let code = self.related_http_code.unwrap_or(500);
        Some(self.error_for(action, user_id, code))
    }

    /// Build the error for a failure with the given HTTP code.
    pub(crate) fn error_for(&self, action: &str, user_id: &str, http_code: u16) -> ClientError {
        let action = self.action_description.as_deref().unwrap_or(action).to_string();
        let message = self.message(http_code);
        match FailureKind::classify(self.exception_class_name.as_deref(), http_code) {
            FailureKind::InvalidParameter => ClientError::InvalidParameter {
                action,
                parameter: self.parameter_name(),
                message,
            },
            FailureKind::UserNotAuthorized => ClientError::UserNotAuthorized {
                action,
                user_id: self
                    .exception_properties
                    .as_ref()
                    .and_then(|p| p.get("userId"))
                    .and_then(Value::as_str)
                    .unwrap_or(user_id)
                    .to_string(),
                message,
            },
            FailureKind::PropertyServer => ClientError::PropertyServerError {
                action,
                http_code: Some(http_code),
                message,
            },
        }
    }

    fn message(&self, http_code: u16) -> String {
        let mut message = self
            .exception_error_message
            .clone()
            .unwrap_or_else(|| format!("request failed with HTTP {http_code}"));
        if let Some(user_action) = &self.exception_user_action {
            message.push_str(" (");
            message.push_str(user_action);
            message.push(')');
        }
        message
    }

    fn parameter_name(&self) -> Option<String> {
        self.exception_properties
            .as_ref()
            .and_then(|p| p.get("parameterName"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Access to the status part of an envelope.
pub trait RestResponse {
    fn status(&self) -> &ResponseStatus;
}

/// Envelope returned by creates: the GUID of the new element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuidResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub guid: Option<String>,
}

/// Envelope returned by calls with no payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoidResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Envelope holding a single element.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementResponse<T> {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub element: Option<T>,
}

/// Envelope holding a page of elements. A missing or null list means no matches.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementsResponse<T> {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub elements: Option<Vec<T>>,
}

impl<T> ElementsResponse<T> {
    pub fn into_elements(self) -> Vec<T> {
        self.elements.unwrap_or_default()
    }
}

macro_rules! impl_rest_response {
    ($($ty:ident $(<$g:ident>)?),+) => {
        $(
            impl$(<$g>)? RestResponse for $ty$(<$g>)? {
                fn status(&self) -> &ResponseStatus {
                    &self.status
                }
            }
        )+
    };
}

impl_rest_response!(GuidResponse, VoidResponse, ElementResponse<T>, ElementsResponse<T>);
