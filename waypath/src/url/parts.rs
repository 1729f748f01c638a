//! Splitting a URL reference into pathname, query and fragment.

use std::fmt;

use super::encoding::{decode_component, encode_component, encode_pathname};
use super::query::Query;

/// The decorations of a URL reference, without any origin.
///
/// `query` and `fragment` distinguish absence (`None`) from presence with
/// no content (`Some` of an empty value).
///
/// # Examples
///
/// ```
/// use waypath::url::UrlParts;
///
/// let parts = UrlParts::parse("/docs/a b.html?q=1#top");
/// assert_eq!(parts.pathname, "/docs/a b.html");
/// assert_eq!(parts.fragment.as_deref(), Some("top"));
/// assert_eq!(parts.to_string(), "/docs/a%20b.html?q=1#top");
///
/// let bare = UrlParts::parse("/a?#");
/// assert!(bare.query.is_some_and(|query| query.is_empty()));
/// assert_eq!(bare.fragment.as_deref(), Some(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// The pathname exactly as written; never decoded.
    pub pathname: String,
    /// Decoded query parameters.
    pub query: Option<Query>,
    /// Decoded fragment, without its `#`.
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Split a reference.
    ///
    /// The fragment starts at the last `#` at or after the last `?` (or at
    /// the last `#` when there is no `?`). The query starts at the last `?`
    /// of what remains.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let fragment_at = match input.rfind('?') {
            Some(question) => input[question..].rfind('#').map(|hash| question + hash),
            None => input.rfind('#'),
        };
        let (rest, fragment) = match fragment_at {
            Some(hash) => (&input[..hash], Some(decode_component(&input[hash + 1..]))),
            None => (input, None),
        };
        let (pathname, query) = match rest.rfind('?') {
            Some(question) => (&rest[..question], Some(Query::parse(&rest[question + 1..]))),
            None => (rest, None),
        };

        Self {
            pathname: pathname.to_owned(),
            query,
            fragment,
        }
    }
}

impl fmt::Display for UrlParts {
    /// Encode the parts back into a reference.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_pathname(&self.pathname))?;
        write_decorations(f, self.query.as_ref(), self.fragment.as_deref())
    }
}

/// Write `?query` and `#fragment` for whichever are present.
pub(crate) fn write_decorations(
    f: &mut impl fmt::Write,
    query: Option<&Query>,
    fragment: Option<&str>,
) -> fmt::Result {
    if let Some(query) = query {
        write!(f, "?{query}")?;
    }
    if let Some(fragment) = fragment {
        write!(f, "#{}", encode_component(fragment))?;
    }
    Ok(())
}
