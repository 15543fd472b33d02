//! Builder-only configuration tests (no environment involvement).

use crate::loader::builder::ConfigLoader;
use crate::types::PagingPolicy;
use secrecy::ExposeSecret;
use std::time::Duration;

fn minimal() -> ConfigLoader {
    ConfigLoader::new()
        .with_platform_url("https://localhost:9443".to_string())
        .with_server_name("active-metadata-store".to_string())
        .with_user_id("erinoverview".to_string())
}

#[test]
fn test_minimal_builder_uses_defaults() {
    let config = minimal().build().unwrap();
    assert_eq!(config.connection.platform_url, "https://localhost:9443");
    assert_eq!(config.connection.server_name, "active-metadata-store");
    assert_eq!(config.auth.user_id, "erinoverview");
    assert!(config.auth.credentials.is_none());
    assert!(!config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert_eq!(config.paging.max_page_size, 1000);
    assert_eq!(config.paging.policy, PagingPolicy::Reject);
}

#[test]
fn test_builder_sets_every_field() {
    let config = minimal()
        .with_credentials("admin".to_string(), "secret".to_string())
        .with_skip_verify(true)
        .with_timeout(Duration::from_secs(90))
        .with_max_page_size(50)
        .with_paging_policy(PagingPolicy::Clamp)
        .build()
        .unwrap();

    let creds = config.auth.credentials.unwrap();
    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password.expose_secret(), "secret");
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(90));
    assert_eq!(config.paging.max_page_size, 50);
    assert_eq!(config.paging.policy, PagingPolicy::Clamp);
}
