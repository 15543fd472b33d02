//! URL encoding utilities for substituting values into request URL templates.
//!
//! GUIDs, type names and server names are interpolated into URL paths and
//! query strings. Without percent-encoding a value such as `a/b` would add a
//! path segment and `a?b` or `a&b` would inject query parameters.
//!
//! # Example
//!
//! ```
//! use metadata_client::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("server/name");
//! assert_eq!(encoded, "server%2Fname");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in substituted values.
///
/// RFC 3986 path-segment reserved characters, plus the query delimiters
/// `&` and `=` because some placeholders sit in the query string.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']')
    .add(b'&')
    .add(b'=');

/// Percent-encode a string for safe use as a URL path segment or query value.
///
/// The dot segments `.` and `..` are encoded as well so a value can never
/// climb out of its position in the template.
///
/// # Examples
///
/// ```
/// use metadata_client::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("a b"), "a%20b");
/// assert_eq!(encode_path_segment(".."), "%2E%2E");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    if segment == "." || segment == ".." {
        return segment.replace('.', "%2E");
    }
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_passes_through() {
        assert_eq!(
            encode_path_segment("0a1b2c3d-4e5f-6789-abcd-ef0123456789"),
            "0a1b2c3d-4e5f-6789-abcd-ef0123456789"
        );
    }

    #[test]
    fn test_encode_slash() {
        assert_eq!(encode_path_segment("a/b/c"), "a%2Fb%2Fc");
    }

    #[test]
    fn test_encode_query_delimiters() {
        assert_eq!(encode_path_segment("x&pageSize=0"), "x%26pageSize%3D0");
        assert_eq!(encode_path_segment("x?y#z"), "x%3Fy%23z");
    }

    #[test]
    fn test_encode_percent_prevents_double_decode() {
        assert_eq!(encode_path_segment("name%20"), "name%2520");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_dot_segments() {
        assert_eq!(encode_path_segment("."), "%2E");
        assert_eq!(encode_path_segment(".."), "%2E%2E");
        assert_eq!(encode_path_segment("a.b"), "a.b");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
