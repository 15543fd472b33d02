//! Centralized constants for the metadata client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default metadata platform port.
pub const DEFAULT_PLATFORM_PORT: u16 = 9443;

// =============================================================================
// Paging Defaults
// =============================================================================

/// Default maximum page size accepted by the parameter validator.
///
/// A value of `0` disables the limit.
pub const DEFAULT_MAX_PAGE_SIZE: i32 = 1000;

/// Upper bound accepted for a configured maximum page size.
pub const MAX_MAX_PAGE_SIZE: i32 = 100_000;
