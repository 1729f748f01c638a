//! Percent-encoding helpers.
//!
//! Output is encoded with the RFC 3986 unreserved set (letters, digits,
//! `-._~`), then any `%25XX` run with a hex `XX` is folded back to `%XX`.
//! The fold makes encoding idempotent: already-encoded input passes through
//! unchanged instead of having its `%` escaped a second time.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode a single pathname segment. A `/` inside the segment is escaped.
///
/// # Examples
///
/// ```
/// use waypath::url::encoding::encode_segment;
///
/// assert_eq!(encode_segment("my file.txt"), "my%20file.txt");
/// assert_eq!(encode_segment("my%20file.txt"), "my%20file.txt");
/// assert_eq!(encode_segment("a?b#c"), "a%3Fb%23c");
/// ```
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    encode_component(segment)
}

/// Encode a slash-delimited pathname, keeping every `/`.
#[must_use]
pub fn encode_pathname(pathname: &str) -> String {
    pathname
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Encode a query key, query value or fragment.
///
/// Spaces become `%20`, never `+`.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let encoded: Cow<'_, str> = utf8_percent_encode(raw, COMPONENT).into();
    undouble(&encoded)
}

/// Decode percent escapes; `+` is left alone. Invalid UTF-8 is replaced.
///
/// # Examples
///
/// ```
/// use waypath::url::encoding::decode_component;
///
/// assert_eq!(decode_component("a%20b+c"), "a b+c");
/// assert_eq!(decode_component("100%"), "100%");
/// ```
#[must_use]
pub fn decode_component(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

/// Fold `%25XX` (hex `XX`) back into `%XX`.
fn undouble(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = String::with_capacity(encoded.len());
    let mut index = 0;

    while let Some(offset) = encoded[index..].find("%25") {
        let start = index + offset;
        let hex = bytes.get(start + 3..start + 5);
        out.push_str(&encoded[index..start]);
        if hex.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
            out.push('%');
        } else {
            out.push_str("%25");
        }
        index = start + 3;
    }

    out.push_str(&encoded[index..]);
    out
}
