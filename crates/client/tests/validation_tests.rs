//! Client-side validation tests.
//!
//! Every test mounts a catch-all mock that expects zero requests: a rejected
//! parameter must never reach the server.
//!
//! # Invariants
//! - Blank identifiers, names and search strings are rejected with the parameter name
//! - Paging bounds are enforced, clamped or rejected per the configured policy
//! - Replace updates and template copies require a qualified name

mod common;

use common::*;
use metadata_client::{ConnectionProperties, EndpointProperties, TemplateProperties};
use wiremock::matchers::{any, method, path, query_param};

async fn server_expecting_no_requests() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    mock_server
}

fn parameter_of(err: &ClientError) -> Option<&str> {
    match err {
        ClientError::InvalidParameter { parameter, .. } => parameter.as_deref(),
        _ => None,
    }
}

#[tokio::test]
async fn test_blank_guids_rejected_before_request() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let err = client.get_connection_by_guid("").await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("connectionGUID"));
    assert_eq!(err.action(), "getConnectionByGUID");

    let err = client.remove_endpoint(&source(), "   ").await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("endpointGUID"));

    let err = client
        .setup_connector_type(&source(), "c-1", "")
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("connectorTypeGUID"));

    let err = client
        .setup_schema_type_parent(&source(), "st-1", "asset-1", " ")
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("parentElementTypeName"));

    let err = client
        .get_nested_schema_attributes("", 0, 10)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("schemaElementGUID"));
}

#[tokio::test]
async fn test_blank_search_string_and_name_rejected() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let err = client.find_connections("", 0, 10).await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("searchString"));

    let err = client
        .get_endpoints_by_name("\t", 0, 10)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("name"));

    let err = client
        .get_endpoints_by_network_address("", 0, 10)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("networkAddress"));

    let err = client.get_metadata_source_guid("").await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("qualifiedName"));
}

#[tokio::test]
async fn test_create_requires_qualified_name() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let err = client
        .create_connection(&source(), &ConnectionProperties::default())
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("qualifiedName"));
    assert_eq!(err.action(), "createConnection");
}

#[tokio::test]
async fn test_replace_update_requires_qualified_name() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let props = EndpointProperties {
        address: Some("db.example.com:5432".to_string()),
        ..Default::default()
    };
    let err = client
        .update_endpoint(&source(), "e-1", false, &props)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("qualifiedName"));
    assert_eq!(err.action(), "updateEndpoint");
}

#[tokio::test]
async fn test_from_template_requires_template_guid() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let template = TemplateProperties {
        qualified_name: Some("Connection:copy".to_string()),
        ..Default::default()
    };
    let err = client
        .create_connection_from_template(&source(), "", &template)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("templateGUID"));

    let err = client
        .create_schema_attribute_from_template(&source(), "st-1", " ", &template)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("templateGUID"));

    let err = client
        .create_endpoint_from_template(&source(), "e-tmpl", &TemplateProperties::default())
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("qualifiedName"));
}

#[tokio::test]
async fn test_negative_paging_rejected() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let err = client.find_endpoints(".*", -1, 10).await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("startFrom"));

    let err = client
        .get_attached_external_references("col-1", 0, -5)
        .await
        .unwrap_err();
    assert_eq!(parameter_of(&err), Some("pageSize"));
}

#[tokio::test]
async fn test_oversized_page_rejected_by_default() {
    let mock_server = server_expecting_no_requests().await;
    let client = MetadataClient::builder()
        .platform_url(mock_server.uri())
        .server_name(SERVER_NAME)
        .user_id(USER_ID)
        .max_page_size(100)
        .build()
        .unwrap();

    let err = client.find_connections(".*", 0, 101).await.unwrap_err();
    assert_eq!(parameter_of(&err), Some("pageSize"));
    assert!(err.to_string().contains("exceeds the maximum page size of 100"));
}

#[tokio::test]
async fn test_oversized_page_clamped_with_clamp_policy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connections/by-search-string")))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200,
            "elements": []
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = MetadataClient::builder()
        .platform_url(mock_server.uri())
        .server_name(SERVER_NAME)
        .user_id(USER_ID)
        .max_page_size(100)
        .paging_policy(PagingPolicy::Clamp)
        .build()
        .unwrap();

    let found = client.find_connections(".*", 0, 5000).await.unwrap();
    assert!(found.is_empty());

    // Zero asks for the server default, which is the configured maximum
    client.find_connections(".*", 0, 0).await.unwrap();
}

#[tokio::test]
async fn test_unlimited_page_size_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/by-name")))
        .and(query_param("pageSize", "250000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MetadataClient::builder()
        .platform_url(mock_server.uri())
        .server_name(SERVER_NAME)
        .user_id(USER_ID)
        .max_page_size(0)
        .build()
        .unwrap();

    let found = client
        .get_endpoints_by_name("Endpoint:orders-db", 0, 250_000)
        .await
        .unwrap();
    assert!(found.is_empty());
}
