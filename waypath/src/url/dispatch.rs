//! Building the right URL path variant from an arbitrary string.

use std::fmt;
use std::str::FromStr;

use super::full::FullPathUrl;
use super::ops::UrlPathOps;
use super::origin::{classify_with, UrlKind};
use super::query::Query;
use super::relative::RelativePathUrl;
use super::root::RootPathUrl;
use crate::config::SchemePolicy;
use crate::error::{Error, Result};

/// Any URL path variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathUrl {
    /// A URL with an origin.
    Full(FullPathUrl),
    /// A path starting at `/`.
    Root(RootPathUrl),
    /// A path relative to some base.
    Relative(RelativePathUrl),
}

/// Classify an input and build the matching URL path variant.
///
/// # Errors
///
/// Returns [`Error::NonHierarchical`] for opaque schemes such as `mailto:`,
/// or any error the chosen variant's constructor raises.
///
/// # Examples
///
/// ```
/// use waypath::url::{path_url, PathUrl};
///
/// assert!(matches!(path_url("https://x.com/a").unwrap(), PathUrl::Full(_)));
/// assert!(matches!(path_url("/a").unwrap(), PathUrl::Root(_)));
/// assert!(matches!(path_url("a").unwrap(), PathUrl::Relative(_)));
///
/// let err = path_url("mailto:someone@example.com").unwrap_err();
/// assert!(err.is_non_hierarchical());
/// ```
pub fn path_url(input: &str) -> Result<PathUrl> {
    path_url_with(input, &SchemePolicy::standard())
}

/// [`path_url`] against a custom scheme policy.
///
/// # Errors
///
/// See [`path_url`].
pub fn path_url_with(input: &str, policy: &SchemePolicy) -> Result<PathUrl> {
    let kind = classify_with(input, policy);
    log::debug!("classified '{input}' as {kind:?}");

    match kind {
        UrlKind::Full => FullPathUrl::parse_with(input, policy).map(PathUrl::Full),
        UrlKind::Opaque { scheme } => Err(Error::NonHierarchical {
            input: input.to_owned(),
            scheme,
        }),
        UrlKind::Root => RootPathUrl::new(input).map(PathUrl::Root),
        UrlKind::Relative => RelativePathUrl::new(input).map(PathUrl::Relative),
    }
}

impl PathUrl {
    /// The canonical encoded string.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Full(url) => url.href(),
            Self::Root(url) => url.href(),
            Self::Relative(url) => url.href(),
        }
    }

    /// Query parameters; `None` when there is no `?`.
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        match self {
            Self::Full(url) => url.query(),
            Self::Root(url) => url.query(),
            Self::Relative(url) => url.query(),
        }
    }

    /// Decoded fragment; `None` when there is no `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Full(url) => url.fragment(),
            Self::Root(url) => url.fragment(),
            Self::Relative(url) => url.fragment(),
        }
    }

    /// Whether the pathname is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        match self {
            Self::Full(url) => url.is_directory(),
            Self::Root(url) => url.is_directory(),
            Self::Relative(url) => url.is_directory(),
        }
    }

    /// Append a reference, keeping the variant.
    #[must_use]
    pub fn join<P: AsRef<str>>(&self, part: P) -> Self {
        match self {
            Self::Full(url) => Self::Full(url.join(part)),
            Self::Root(url) => Self::Root(url.join(part)),
            Self::Relative(url) => Self::Relative(url.join(part)),
        }
    }

    /// The full URL, if this is one.
    #[must_use]
    pub fn as_full(&self) -> Option<&FullPathUrl> {
        match self {
            Self::Full(url) => Some(url),
            _ => None,
        }
    }

    /// The root path, if this is one.
    #[must_use]
    pub fn as_root(&self) -> Option<&RootPathUrl> {
        match self {
            Self::Root(url) => Some(url),
            _ => None,
        }
    }

    /// The relative path, if this is one.
    #[must_use]
    pub fn as_relative(&self) -> Option<&RelativePathUrl> {
        match self {
            Self::Relative(url) => Some(url),
            _ => None,
        }
    }
}

impl From<FullPathUrl> for PathUrl {
    fn from(url: FullPathUrl) -> Self {
        Self::Full(url)
    }
}

impl From<RootPathUrl> for PathUrl {
    fn from(url: RootPathUrl) -> Self {
        Self::Root(url)
    }
}

impl From<RelativePathUrl> for PathUrl {
    fn from(url: RelativePathUrl) -> Self {
        Self::Relative(url)
    }
}

impl FromStr for PathUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        path_url(s)
    }
}

impl fmt::Display for PathUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

impl AsRef<str> for PathUrl {
    fn as_ref(&self) -> &str {
        self.href()
    }
}
