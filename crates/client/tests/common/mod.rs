//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the metadata client against a `wiremock` server. All
//! integration tests should use these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//! - Clients built here talk to server `cocoMDS1` as user `erin`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::path::Path;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use metadata_client::{ClientError, ExternalSource, MetadataClient, PagingPolicy};
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SERVER_NAME: &str = "cocoMDS1";
pub const USER_ID: &str = "erin";

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> MetadataClient {
    MetadataClient::builder()
        .platform_url(server.uri())
        .server_name(SERVER_NAME)
        .user_id(USER_ID)
        .build()
        .expect("client builds")
}

/// Full request path for an operation path relative to the data manager root.
#[allow(dead_code)]
pub fn dm_path(suffix: &str) -> String {
    format!(
        "/servers/{SERVER_NAME}/open-metadata/access-services/data-manager/users/{USER_ID}{suffix}"
    )
}

/// The external source most tests make changes on behalf of.
#[allow(dead_code)]
pub fn source() -> ExternalSource {
    ExternalSource::new("f00d0000-0000-4000-8000-0000000000aa", "OrdersDatabaseServer")
}

#[allow(dead_code)]
pub fn guid_response(guid: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "class": "GUIDResponse",
        "relatedHTTPCode": 200,
        "guid": guid
    }))
}

#[allow(dead_code)]
pub fn void_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "class": "VoidResponse",
        "relatedHTTPCode": 200
    }))
}
