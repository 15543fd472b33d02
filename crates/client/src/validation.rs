//! Client-side parameter validation.
//!
//! Responsibilities:
//! - Reject missing or blank identifiers, names and search strings.
//! - Enforce paging bounds, rejecting or clamping oversized pages per configuration.
//! - Require a qualified name whenever properties fully replace an element.
//!
//! Does NOT handle:
//! - Validation the server performs (type names, uniqueness, existence).
//!
//! Invariants:
//! - Every check completes before any request is composed or sent.
//! - Errors always carry the parameter name and the calling operation name.

use metadata_config::{PagingConfig, PagingPolicy};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::HasQualifiedName;

/// Parameter name used when a qualified name is missing from supplied properties.
pub const QUALIFIED_NAME_PARAMETER: &str = "qualifiedName";

/// Validates façade parameters against the configured paging limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterValidator {
    max_page_size: i32,
    policy: PagingPolicy,
}

impl Default for ParameterValidator {
    fn default() -> Self {
        Self::from(PagingConfig::default())
    }
}

impl From<PagingConfig> for ParameterValidator {
    fn from(config: PagingConfig) -> Self {
        Self::new(config.max_page_size, config.policy)
    }
}

impl ParameterValidator {
    /// Create a validator. A `max_page_size` of `0` disables the page limit.
    pub const fn new(max_page_size: i32, policy: PagingPolicy) -> Self {
        Self {
            max_page_size,
            policy,
        }
    }

    pub const fn max_page_size(&self) -> i32 {
        self.max_page_size
    }

    pub const fn policy(&self) -> PagingPolicy {
        self.policy
    }

    /// Reject a blank user id.
    pub fn validate_user_id(&self, user_id: &str, action: &str) -> Result<()> {
        require_text(user_id, "userId", action)
    }

    /// Reject a blank unique identifier.
    pub fn validate_guid(&self, guid: &str, parameter: &str, action: &str) -> Result<()> {
        require_text(guid, parameter, action)
    }

    /// Reject a blank name.
    pub fn validate_name(&self, name: &str, parameter: &str, action: &str) -> Result<()> {
        require_text(name, parameter, action)
    }

    /// Reject a blank search string.
    pub fn validate_search_string(
        &self,
        search_string: &str,
        parameter: &str,
        action: &str,
    ) -> Result<()> {
        require_text(search_string, parameter, action)
    }

    /// Reject an absent required object.
    pub fn validate_object<'a, T>(
        &self,
        object: Option<&'a T>,
        parameter: &str,
        action: &str,
    ) -> Result<&'a T> {
        object.ok_or_else(|| ClientError::invalid_parameter(action, parameter, "must not be null"))
    }

    /// Require the properties to carry a non-blank qualified name.
    pub fn validate_qualified_name<P: HasQualifiedName + ?Sized>(
        &self,
        properties: &P,
        action: &str,
    ) -> Result<()> {
        match properties.qualified_name() {
            Some(name) => require_text(name, QUALIFIED_NAME_PARAMETER, action),
            None => Err(ClientError::invalid_parameter(
                action,
                QUALIFIED_NAME_PARAMETER,
                "must be supplied",
            )),
        }
    }

    /// Check properties for an update.
    ///
    /// A replace update (`is_merge_update == false`) overwrites every property,
    /// so the qualified name must be present. A merge update may omit it.
    pub fn validate_update_properties<P: HasQualifiedName + ?Sized>(
        &self,
        properties: &P,
        is_merge_update: bool,
        action: &str,
    ) -> Result<()> {
        if is_merge_update {
            return Ok(());
        }
        self.validate_qualified_name(properties, action)
    }

    /// Check paging parameters and return the page size to send.
    ///
    /// A page size of `0` asks for the server default, which is the configured
    /// maximum when a limit is set.
    pub fn validate_paging(&self, start_from: i32, page_size: i32, action: &str) -> Result<i32> {
        if start_from < 0 {
            return Err(ClientError::invalid_parameter(
                action,
                "startFrom",
                format!("must not be negative (got {start_from})"),
            ));
        }
        if page_size < 0 {
            return Err(ClientError::invalid_parameter(
                action,
                "pageSize",
                format!("must not be negative (got {page_size})"),
            ));
        }
        if self.max_page_size <= 0 {
            return Ok(page_size);
        }
        if page_size == 0 {
            return Ok(self.max_page_size);
        }
        if page_size > self.max_page_size {
            return match self.policy {
                PagingPolicy::Reject => Err(ClientError::invalid_parameter(
                    action,
                    "pageSize",
                    format!(
                        "{page_size} exceeds the maximum page size of {}",
                        self.max_page_size
                    ),
                )),
                PagingPolicy::Clamp => {
                    debug!(
                        action,
                        requested = page_size,
                        max = self.max_page_size,
                        "Clamping page size to configured maximum"
                    );
                    Ok(self.max_page_size)
                }
            };
        }
        Ok(page_size)
    }
}

fn require_text(value: &str, parameter: &str, action: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::invalid_parameter(
            action,
            parameter,
            "must not be null or blank",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConnectionProperties;
    use proptest::prelude::*;

    fn validator(max: i32, policy: PagingPolicy) -> ParameterValidator {
        ParameterValidator::new(max, policy)
    }

    #[test]
    fn test_blank_identifiers_rejected() {
        let v = ParameterValidator::default();
        assert!(v.validate_user_id("", "getConnectionByGUID").is_err());
        assert!(v.validate_guid("   ", "connectionGUID", "getConnectionByGUID").is_err());
        assert!(v.validate_name("\t", "name", "getConnectionsByName").is_err());
        assert!(v.validate_search_string("", "searchString", "findConnections").is_err());
        assert!(v.validate_guid("b0f3-11", "connectionGUID", "getConnectionByGUID").is_ok());
    }

    #[test]
    fn test_error_names_parameter_and_action() {
        let err = ParameterValidator::default()
            .validate_guid("", "endpointGUID", "removeEndpoint")
            .unwrap_err();
        match err {
            ClientError::InvalidParameter {
                action, parameter, ..
            } => {
                assert_eq!(action, "removeEndpoint");
                assert_eq!(parameter.as_deref(), Some("endpointGUID"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validate_object() {
        let v = ParameterValidator::default();
        let props = ConnectionProperties::default();
        assert!(v.validate_object(Some(&props), "properties", "a").is_ok());
        assert!(v
            .validate_object::<ConnectionProperties>(None, "properties", "a")
            .is_err());
    }

    #[test]
    fn test_replace_update_requires_qualified_name() {
        let v = ParameterValidator::default();
        let props = ConnectionProperties::default();
        assert!(v.validate_update_properties(&props, false, "updateConnection").is_err());
        assert!(v.validate_update_properties(&props, true, "updateConnection").is_ok());

        let named = ConnectionProperties {
            qualified_name: Some("Connection:orders".to_string()),
            ..Default::default()
        };
        assert!(v.validate_update_properties(&named, false, "updateConnection").is_ok());
    }

    #[test]
    fn test_blank_qualified_name_rejected() {
        let props = ConnectionProperties {
            qualified_name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(ParameterValidator::default()
            .validate_qualified_name(&props, "createConnection")
            .is_err());
    }

    #[test]
    fn test_paging_zero_means_maximum() {
        let v = validator(500, PagingPolicy::Reject);
        assert_eq!(v.validate_paging(0, 0, "a").unwrap(), 500);
    }

    #[test]
    fn test_paging_unlimited_passes_through() {
        let v = validator(0, PagingPolicy::Reject);
        assert_eq!(v.validate_paging(10, 0, "a").unwrap(), 0);
        assert_eq!(v.validate_paging(10, 1_000_000, "a").unwrap(), 1_000_000);
    }

    #[test]
    fn test_paging_clamps_oversized_page() {
        let v = validator(100, PagingPolicy::Clamp);
        assert_eq!(v.validate_paging(0, 101, "a").unwrap(), 100);
    }

    proptest! {
        #[test]
        fn prop_negative_start_from_always_rejected(start in i32::MIN..0, size in 0i32..1000) {
            let v = validator(1000, PagingPolicy::Clamp);
            prop_assert!(v.validate_paging(start, size, "a").is_err());
        }

        #[test]
        fn prop_negative_page_size_always_rejected(start in 0i32..1000, size in i32::MIN..0) {
            let v = validator(1000, PagingPolicy::Clamp);
            prop_assert!(v.validate_paging(start, size, "a").is_err());
        }

        #[test]
        fn prop_oversized_page_rejected(max in 1i32..10_000, excess in 1i32..10_000) {
            let v = validator(max, PagingPolicy::Reject);
            prop_assert!(v.validate_paging(0, max + excess, "a").is_err());
        }

        #[test]
        fn prop_in_range_page_returned_unchanged(max in 1i32..10_000, start in 0i32..10_000, frac in 0.0f64..1.0) {
            let size = ((f64::from(max) * frac) as i32).max(1);
            for policy in [PagingPolicy::Reject, PagingPolicy::Clamp] {
                let v = validator(max, policy);
                prop_assert_eq!(v.validate_paging(start, size, "a").unwrap(), size);
            }
        }

        #[test]
        fn prop_clamped_page_never_exceeds_max(max in 1i32..10_000, size in 0i32..100_000) {
            let v = validator(max, PagingPolicy::Clamp);
            let effective = v.validate_paging(0, size, "a").unwrap();
            prop_assert!(effective <= max);
            prop_assert!(effective > 0);
        }
    }
}
