//! Endpoint and connector type operation tests.
//!
//! # Invariants
//! - Lookups by network address send the address in a name request body
//! - Create-from-template sends the template overrides as element properties

mod common;

use common::*;
use metadata_client::{ConnectorTypeProperties, EndpointProperties, TemplateProperties};
use wiremock::matchers::{body_partial_json, method, path, query_param};

#[tokio::test]
async fn test_create_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints")))
        .and(body_partial_json(json!({
            "elementProperties": {
                "qualifiedName": "Endpoint:orders-db",
                "address": "db.example.com:5432",
                "protocol": "postgres"
            }
        })))
        .respond_with(guid_response("e-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let props = EndpointProperties {
        qualified_name: Some("Endpoint:orders-db".to_string()),
        address: Some("db.example.com:5432".to_string()),
        protocol: Some("postgres".to_string()),
        ..Default::default()
    };
    let guid = client.create_endpoint(&source(), &props).await.unwrap();
    assert_eq!(guid, "e-1");
}

#[tokio::test]
async fn test_create_endpoint_from_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/from-template/e-tmpl")))
        .respond_with(guid_response("e-2"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let template = TemplateProperties {
        qualified_name: Some("Endpoint:orders-db-replica".to_string()),
        network_address: Some("replica.example.com:5432".to_string()),
        ..Default::default()
    };
    let guid = client
        .create_endpoint_from_template(&source(), "e-tmpl", &template)
        .await
        .unwrap();
    assert_eq!(guid, "e-2");
}

#[tokio::test]
async fn test_update_and_remove_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/e-1")))
        .and(query_param("isMergeUpdate", "true"))
        .respond_with(void_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/e-1/delete")))
        .respond_with(void_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let props = EndpointProperties {
        encryption_method: Some("TLS".to_string()),
        ..Default::default()
    };
    client
        .update_endpoint(&source(), "e-1", true, &props)
        .await
        .unwrap();
    client.remove_endpoint(&source(), "e-1").await.unwrap();
}

#[tokio::test]
async fn test_find_endpoints() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("endpoints/find_endpoints.json");

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/by-search-string")))
        .and(query_param("startFrom", "20"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let endpoints = client.find_endpoints(".*orders.*", 20, 5).await.unwrap();

    assert_eq!(endpoints.len(), 1);
    assert_eq!(
        endpoints[0].endpoint_properties.encryption_method.as_deref(),
        Some("TLS")
    );
}

#[tokio::test]
async fn test_get_endpoints_by_network_address() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("endpoints/find_endpoints.json");

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/by-network-address")))
        .and(body_partial_json(json!({
            "name": "db.example.com:5432",
            "nameParameterName": "networkAddress"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let endpoints = client
        .get_endpoints_by_network_address("db.example.com:5432", 0, 0)
        .await
        .unwrap();
    assert_eq!(endpoints.len(), 1);
    assert_eq!(
        endpoints[0].endpoint_properties.address.as_deref(),
        Some("db.example.com:5432")
    );
}

#[tokio::test]
async fn test_get_endpoints_by_name_and_guid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/endpoints/by-name")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(
            "endpoints/find_endpoints.json",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(dm_path("/endpoints/e0000000-0000-4000-8000-000000000001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(
            "endpoints/get_endpoint.json",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let by_name = client
        .get_endpoints_by_name("Endpoint:orders-db", 0, 10)
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);

    let endpoint = client
        .get_endpoint_by_guid(&by_name[0].element_header.guid)
        .await
        .unwrap();
    assert_eq!(
        endpoint.endpoint_properties.display_name.as_deref(),
        Some("Orders DB endpoint")
    );
}

#[tokio::test]
async fn test_connector_type_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types")))
        .and(body_partial_json(json!({
            "elementProperties": {
                "qualifiedName": "ConnectorType:postgres",
                "connectorProviderClassName": "org.example.PostgresConnectorProvider",
                "recognizedConfigurationProperties": ["schema"]
            }
        })))
        .respond_with(guid_response("ct-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types/ct-1")))
        .and(query_param("isMergeUpdate", "false"))
        .respond_with(void_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types/from-template/ct-1")))
        .respond_with(guid_response("ct-2"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types/by-search-string")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200,
            "elements": [{
                "elementHeader": {"guid": "ct-1"},
                "connectorTypeProperties": {"qualifiedName": "ConnectorType:postgres"}
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types/by-name")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(dm_path("/connector-types/ct-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200,
            "element": {
                "elementHeader": {"guid": "ct-1"},
                "connectorTypeProperties": {
                    "qualifiedName": "ConnectorType:postgres",
                    "connectorFrameworkName": "Open Connector Framework (OCF)"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(dm_path("/connector-types/ct-1/delete")))
        .respond_with(void_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let props = ConnectorTypeProperties {
        qualified_name: Some("ConnectorType:postgres".to_string()),
        connector_provider_class_name: Some("org.example.PostgresConnectorProvider".to_string()),
        recognized_configuration_properties: Some(vec!["schema".to_string()]),
        ..Default::default()
    };

    let guid = client.create_connector_type(&source(), &props).await.unwrap();
    assert_eq!(guid, "ct-1");

    client
        .update_connector_type(&source(), &guid, false, &props)
        .await
        .unwrap();

    let template = TemplateProperties {
        qualified_name: Some("ConnectorType:postgres-v2".to_string()),
        ..Default::default()
    };
    let copy = client
        .create_connector_type_from_template(&source(), &guid, &template)
        .await
        .unwrap();
    assert_eq!(copy, "ct-2");

    let found = client
        .find_connector_types("ConnectorType:.*", 0, 10)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let by_name = client
        .get_connector_types_by_name("ConnectorType:none", 0, 10)
        .await
        .unwrap();
    assert!(by_name.is_empty());

    let element = client.get_connector_type_by_guid(&guid).await.unwrap();
    assert_eq!(
        element
            .connector_type_properties
            .connector_framework_name
            .as_deref(),
        Some("Open Connector Framework (OCF)")
    );

    client.remove_connector_type(&source(), &guid).await.unwrap();
}
