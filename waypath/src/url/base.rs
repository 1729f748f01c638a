//! The shared data record behind every URL path variant.

use super::encoding::encode_segment;
use super::parts::{write_decorations, UrlParts};
use super::query::Query;
use crate::path::normalize::{relative_segments, NormalForm};

/// Pathname, query and fragment of a URL path.
///
/// Pathname segments are stored in their canonical encoded form, so raw and
/// already-encoded spellings of the same segment compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UrlCore {
    pathname: NormalForm,
    query: Option<Query>,
    fragment: Option<String>,
}

impl UrlCore {
    /// Build from split parts, normalizing and encoding the pathname.
    pub(crate) fn from_parts(parts: UrlParts) -> Self {
        Self {
            pathname: canonical(&NormalForm::parse(&parts.pathname)),
            query: parts.query,
            fragment: parts.fragment,
        }
    }

    pub(crate) fn parse(input: &str) -> Self {
        Self::from_parts(UrlParts::parse(input))
    }

    pub(crate) fn pathname(&self) -> &NormalForm {
        &self.pathname
    }

    pub(crate) fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub(crate) fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub(crate) fn segments(&self) -> Vec<&str> {
        self.pathname.segments().iter().map(String::as_str).collect()
    }

    /// Append a reference: the pathname is joined, the query merged and a
    /// non-empty fragment replaces the current one.
    pub(crate) fn join(&self, parts: &UrlParts) -> Self {
        let query = match (&self.query, &parts.query) {
            (Some(current), Some(incoming)) => Some(current.merge(incoming)),
            (current, incoming) => incoming.clone().or_else(|| current.clone()),
        };
        let fragment = match parts.fragment.as_deref() {
            Some(fragment) if !fragment.is_empty() => Some(fragment.to_owned()),
            _ => self.fragment.clone(),
        };

        Self {
            pathname: canonical(&self.pathname.append(&parts.pathname)),
            query,
            fragment,
        }
    }

    pub(crate) fn with_pathname(&self, pathname: NormalForm) -> Self {
        Self {
            pathname: canonical(&pathname),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }

    pub(crate) fn with_rooted(&self, rooted: bool) -> Self {
        if self.pathname.is_rooted() == rooted {
            return self.clone();
        }
        self.with_pathname(self.pathname.with_rooted(rooted))
    }

    pub(crate) fn with_query(&self, query: Option<Query>) -> Self {
        Self {
            query,
            ..self.clone()
        }
    }

    pub(crate) fn with_fragment(&self, fragment: Option<String>) -> Self {
        Self {
            fragment,
            ..self.clone()
        }
    }

    /// The directory containing this path, without decorations.
    pub(crate) fn parent(&self) -> Self {
        Self {
            pathname: self.pathname.parent(),
            query: None,
            fragment: None,
        }
    }

    /// The unrooted path leading from `base` to this one, keeping this
    /// path's decorations and directory flag.
    ///
    /// Joining the result back onto `base` yields this path. A result made
    /// only of `..` segments that would rejoin with the wrong directory flag
    /// ends with one more `..` and this path's last segment instead.
    pub(crate) fn relative_to(&self, base: &UrlCore) -> Self {
        let base_segments = base.segments();
        let own = self.segments();
        let mut segments = relative_segments(&base_segments, &own);
        let directory = self.pathname.is_directory();

        let ascends_only = segments.iter().all(|segment| segment == "..");
        let joined_directory = !segments.is_empty() || base.pathname.is_directory();
        if let Some(last) = own.last() {
            if ascends_only && joined_directory != directory {
                segments.push("..".to_owned());
                segments.push((*last).to_owned());
            }
        }

        Self {
            pathname: NormalForm::from_segments(segments, false, directory),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }

    /// Pathname followed by `?query` and `#fragment`.
    ///
    /// An empty relative pathname renders as `.` on its own and as nothing
    /// in front of a decoration.
    pub(crate) fn render(&self) -> String {
        let decorated = self.query.is_some() || self.fragment.is_some();
        let mut rendered = if decorated && self.pathname.is_empty() && !self.pathname.is_rooted() {
            String::new()
        } else {
            self.pathname.to_pathname_string()
        };
        // Writing into a String cannot fail
        let _ = write_decorations(&mut rendered, self.query.as_ref(), self.fragment.as_deref());
        rendered
    }
}

/// Re-encode every segment in canonical form.
fn canonical(form: &NormalForm) -> NormalForm {
    NormalForm::from_segments(
        form.segments().iter().map(|segment| encode_segment(segment)),
        form.is_rooted(),
        form.is_directory(),
    )
}
