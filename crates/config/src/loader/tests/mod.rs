//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables read by the loader; cleared by tests that need a blank slate.
pub const METADATA_ENV_VARS: [&str; 9] = [
    "METADATA_PLATFORM_URL",
    "METADATA_SERVER_NAME",
    "METADATA_USER_ID",
    "METADATA_USERNAME",
    "METADATA_PASSWORD",
    "METADATA_SKIP_VERIFY",
    "METADATA_TIMEOUT",
    "METADATA_MAX_PAGE_SIZE",
    "METADATA_PAGING_POLICY",
];
