//! Request/response marshaling for the metadata server's REST services.
//!
//! # Submodules
//! - [`template`]: Positional URL template expansion
//! - [`requests`]: Request bodies carrying external-source provenance
//! - [`responses`]: GUID, element, element-list and void response envelopes
//! - [`invoker`]: The shared REST-calling helper
//!
//! # What this module does NOT handle:
//! - Parameter validation (see [`crate::validation`])
//! - Operation-specific URL templates (see the [`crate::client`] submodules)

pub mod invoker;
pub mod requests;
pub mod responses;
pub mod template;

pub use invoker::RestInvoker;
