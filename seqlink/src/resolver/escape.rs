//! Percent encoding for identifiers embedded in query strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters `A-Z a-z 0-9 - . _ ~`.
pub const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes every character outside the unreserved set.
#[must_use]
pub fn escape_unreserved(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}
