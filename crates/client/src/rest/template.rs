//! URL template expansion.
//!
//! Templates use positional placeholders, `{0}` through `{N}`, which may
//! appear in the path or the query string:
//!
//! ```
//! use metadata_client::rest::template::expand;
//!
//! let url = expand(
//!     "/servers/{0}/users/{1}/connections/{2}?isMergeUpdate={3}",
//!     &["cocoMDS1", "erin", "guid 1", "true"],
//!     "updateConnection",
//! )
//! .unwrap();
//! assert_eq!(url, "/servers/cocoMDS1/users/erin/connections/guid%201?isMergeUpdate=true");
//! ```

use crate::error::{ClientError, Result};
use crate::url_encoding::encode_path_segment;

const TEMPLATE_PARAMETER: &str = "urlTemplate";

/// Substitute `values` into `template`, percent-encoding each value.
///
/// # Errors
///
/// Returns [`ClientError::InvalidParameter`] if a placeholder has no value,
/// is not a number, or is left unterminated.
pub fn expand(template: &str, values: &[&str], action: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len() + values.iter().map(|v| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ClientError::invalid_parameter(
                action,
                TEMPLATE_PARAMETER,
                format!("unterminated placeholder in '{template}'"),
            )
        })?;
        let index: usize = after[..close].parse().map_err(|_| {
            ClientError::invalid_parameter(
                action,
                TEMPLATE_PARAMETER,
                format!("placeholder '{{{}}}' is not positional", &after[..close]),
            )
        })?;
        let value = values.get(index).ok_or_else(|| {
            ClientError::invalid_parameter(
                action,
                TEMPLATE_PARAMETER,
                format!(
                    "no value for placeholder {{{index}}} ({} supplied)",
                    values.len()
                ),
            )
        })?;
        out.push_str(&encode_path_segment(value));
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
