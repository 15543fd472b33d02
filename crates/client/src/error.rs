//! Error types for the metadata client.
//!
//! Every failure a façade operation can surface falls into one of three
//! kinds. Each carries the name of the operation that raised it so callers
//! can attribute the failure without a backtrace.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during metadata client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A parameter was rejected, either locally before any request or by the server.
    #[error("Invalid parameter{} in {action}: {message}", .parameter.as_ref().map(|p| format!(" '{p}'")).unwrap_or_default())]
    InvalidParameter {
        action: String,
        parameter: Option<String>,
        message: String,
    },

    /// The server refused the call for the calling user.
    #[error("User {user_id} is not authorized to call {action}: {message}")]
    UserNotAuthorized {
        action: String,
        user_id: String,
        message: String,
    },

    /// The server, its repository, or the transport failed.
    #[error("Property server error in {action}{}: {message}", .http_code.map(|c| format!(" (HTTP {c})")).unwrap_or_default())]
    PropertyServerError {
        action: String,
        http_code: Option<u16>,
        message: String,
    },
}

impl ClientError {
    /// Build an invalid-parameter error naming the offending parameter.
    pub fn invalid_parameter(
        action: impl Into<String>,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            action: action.into(),
            parameter: Some(parameter.into()),
            message: message.into(),
        }
    }

    /// Build a property-server error.
    pub fn property_server(
        action: impl Into<String>,
        http_code: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::PropertyServerError {
            action: action.into(),
            http_code,
            message: message.into(),
        }
    }

    /// Name of the operation that raised this error.
    pub fn action(&self) -> &str {
        match self {
            Self::InvalidParameter { action, .. }
            | Self::UserNotAuthorized { action, .. }
            | Self::PropertyServerError { action, .. } => action,
        }
    }

    /// HTTP status code reported with a property-server error, if any.
    pub fn http_code(&self) -> Option<u16> {
        match self {
            Self::PropertyServerError { http_code, .. } => *http_code,
            Self::InvalidParameter { .. } | Self::UserNotAuthorized { .. } => None,
        }
    }

    /// Check if this error was a parameter rejection.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this error indicates an authorization failure.
    pub fn is_authorization_error(&self) -> bool {
        matches!(self, Self::UserNotAuthorized { .. })
    }

    /// Check if this error came from the server side or the transport.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::PropertyServerError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display_names_parameter() {
        let err = ClientError::invalid_parameter("createConnection", "properties", "is null");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'properties' in createConnection: is null"
        );
        assert!(err.is_invalid_parameter());
        assert_eq!(err.action(), "createConnection");
    }

    #[test]
    fn test_property_server_display_includes_code() {
        let err = ClientError::property_server("getEndpointByGUID", Some(503), "unavailable");
        assert_eq!(
            err.to_string(),
            "Property server error in getEndpointByGUID (HTTP 503): unavailable"
        );
        assert_eq!(err.http_code(), Some(503));
        assert!(err.is_server_error());
    }

    #[test]
    fn test_user_not_authorized_classification() {
        let err = ClientError::UserNotAuthorized {
            action: "removeConnection".to_string(),
            user_id: "erin".to_string(),
            message: "denied".to_string(),
        };
        assert!(err.is_authorization_error());
        assert!(!err.is_invalid_parameter());
        assert_eq!(err.http_code(), None);
    }

    #[test]
    fn test_invalid_parameter_without_name() {
        let err = ClientError::InvalidParameter {
            action: "updateEndpoint".to_string(),
            parameter: None,
            message: "rejected".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter in updateEndpoint: rejected");
    }
}
