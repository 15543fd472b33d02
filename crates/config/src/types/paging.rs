//! Paging limits applied by the client-side parameter validator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_MAX_PAGE_SIZE;

/// What to do with a requested page size above the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingPolicy {
    /// Fail the call with an invalid-parameter error.
    #[default]
    Reject,
    /// Reduce the page size to the maximum and continue.
    Clamp,
}

impl fmt::Display for PagingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Clamp => write!(f, "clamp"),
        }
    }
}

impl FromStr for PagingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            other => Err(format!("unknown paging policy '{other}'")),
        }
    }
}

/// Paging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Largest page size a caller may request. `0` disables the limit.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i32,
    #[serde(default)]
    pub policy: PagingPolicy,
}

fn default_max_page_size() -> i32 {
    DEFAULT_MAX_PAGE_SIZE
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            policy: PagingPolicy::Reject,
        }
    }
}
