//! Root-relative URL paths.

use serde::{Deserialize, Serialize};

use super::base::UrlCore;
use super::ops::{sealed, UrlPathOps};
use super::origin::{classify, UrlKind};
use super::parts::UrlParts;
use super::relative::RelativePathUrl;
use crate::error::{Error, Result};
use crate::path::PathRelationship;

/// A URL path starting at `/`, with no origin.
///
/// # Examples
///
/// ```
/// use waypath::url::{RootPathUrl, UrlPathOps};
///
/// let base = RootPathUrl::new("/app/assets/").unwrap();
/// let resolved = base.resolve_all(["css/site.css?v=1", "/img/", "logo.svg"]).unwrap();
/// assert_eq!(resolved.href(), "/img/logo.svg");
///
/// assert!(RootPathUrl::new("/a?").unwrap().query().is_some());
/// assert!(RootPathUrl::new("/a").unwrap().query().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootPathUrl {
    core: UrlCore,
    href: String,
}

impl RootPathUrl {
    /// Parse a root URL path.
    ///
    /// An input made only of decorations (such as `?a=1`) is anchored at
    /// `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MustBeAbsolute`] for a relative pathname,
    /// [`Error::UnexpectedOrigin`] for input carrying an origin and
    /// [`Error::NonHierarchical`] for an opaque scheme.
    pub fn new(input: impl AsRef<str>) -> Result<Self> {
        let input = input.as_ref();
        match classify(input) {
            UrlKind::Root => Ok(Self::from_core(UrlCore::parse(input))),
            UrlKind::Relative => {
                let parts = UrlParts::parse(input);
                if !parts.pathname.is_empty() {
                    return Err(Error::MustBeAbsolute {
                        path: input.to_owned(),
                    });
                }
                Ok(Self::from_core(UrlCore::from_parts(parts)))
            }
            UrlKind::Full => Err(Error::UnexpectedOrigin {
                input: input.to_owned(),
            }),
            UrlKind::Opaque { scheme } => Err(Error::NonHierarchical {
                input: input.to_owned(),
                scheme,
            }),
        }
    }

    /// The bare root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::from_core(UrlCore::default())
    }

    /// Resolve one part against this path.
    ///
    /// A rooted part discards pathname, query and fragment and starts over.
    /// Anything else is joined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedOrigin`] if the part carries an origin and
    /// [`Error::NonHierarchical`] for an opaque scheme.
    pub fn resolve<P: AsRef<str>>(&self, part: P) -> Result<Self> {
        let part = part.as_ref();
        match classify(part) {
            UrlKind::Relative => Ok(self.join(part)),
            UrlKind::Root => {
                log::trace!("resolve of {} restarted at {part}", self.href);
                Ok(Self::from_core(UrlCore::parse(part)))
            }
            UrlKind::Full => Err(Error::UnexpectedOrigin {
                input: part.to_owned(),
            }),
            UrlKind::Opaque { scheme } => Err(Error::NonHierarchical {
                input: part.to_owned(),
                scheme,
            }),
        }
    }

    /// Resolve several parts in order.
    ///
    /// # Errors
    ///
    /// Fails on the first part [`resolve`](Self::resolve) rejects.
    pub fn resolve_all<I>(&self, parts: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parts
            .into_iter()
            .try_fold(self.clone(), |resolved, part| resolved.resolve(part))
    }

    /// The relative path leading from `base` to this path.
    ///
    /// The result keeps the query, fragment and directory flag of `self`.
    #[must_use]
    pub fn relative_to(&self, base: &RootPathUrl) -> RelativePathUrl {
        RelativePathUrl::from_core(self.core.relative_to(&base.core))
    }

    /// Relationship of this path to `other`, segment by segment.
    #[must_use]
    pub fn relationship(&self, other: &RootPathUrl) -> PathRelationship {
        PathRelationship::between(&self.core.segments(), &other.core.segments())
    }

    /// Whether this path lies strictly beneath `ancestor`.
    #[must_use]
    pub fn descends_from(&self, ancestor: &RootPathUrl) -> bool {
        self.relationship(ancestor).is_descent(false)
    }

    /// Whether this path is `ancestor` or lies beneath it.
    #[must_use]
    pub fn descends_from_inclusive(&self, ancestor: &RootPathUrl) -> bool {
        self.relationship(ancestor).is_descent(true)
    }

    pub(crate) fn from_core(core: UrlCore) -> Self {
        let core = core.with_rooted(true);
        let href = core.render();
        Self { core, href }
    }
}

impl sealed::Core for RootPathUrl {
    fn core(&self) -> &UrlCore {
        &self.core
    }

    fn with_core(&self, core: UrlCore) -> Self {
        Self::from_core(core)
    }
}

impl UrlPathOps for RootPathUrl {}

impl Default for RootPathUrl {
    fn default() -> Self {
        Self::root()
    }
}

impl_string_traits!(RootPathUrl);
