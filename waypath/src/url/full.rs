//! Full URL paths: an origin plus a rooted pathname.

use serde::{Deserialize, Serialize};
use url::Url;

use super::base::UrlCore;
use super::ops::{sealed, UrlPathOps};
use super::origin::{classify_with, split_origin, Origin, UrlKind};
use super::relative::RelativePathUrl;
use super::root::RootPathUrl;
use crate::config::SchemePolicy;
use crate::error::{Error, Result};
use crate::path::PathRelationship;

/// A hierarchical URL with an origin.
///
/// Scheme and host are lowercased on construction. Scheme-relative input
/// (`//host/path`) is accepted and keeps no scheme until it is resolved
/// against a URL that has one.
///
/// # Examples
///
/// ```
/// use waypath::url::{FullPathUrl, UrlPathOps};
///
/// let url = FullPathUrl::new("HTTPS://Example.com/foo?a=a1&b=b1#old").unwrap();
/// let joined = url.join("bar?b=b2&c=c2#new");
/// assert_eq!(joined.href(), "https://example.com/foo/bar?a=a1&b=b2&c=c2#new");
///
/// let moved = joined.resolve("//cdn.example.com/lib.js").unwrap();
/// assert_eq!(moved.href(), "https://cdn.example.com/lib.js");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullPathUrl {
    origin: Origin,
    core: UrlCore,
    href: String,
}

impl FullPathUrl {
    /// Parse a full URL with the built-in hierarchical schemes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonHierarchical`] for an opaque scheme,
    /// [`Error::InvalidOrigin`] for a malformed authority and
    /// [`Error::InvalidUrl`] when there is no scheme at all.
    pub fn new(input: impl AsRef<str>) -> Result<Self> {
        Self::parse_with(input.as_ref(), &SchemePolicy::standard())
    }

    /// Parse a full URL, treating the policy's schemes as hierarchical.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn parse_with(input: &str, policy: &SchemePolicy) -> Result<Self> {
        match classify_with(input, policy) {
            UrlKind::Full => {
                let (origin, rest) = split_origin(input, policy)?;
                Ok(Self::assemble(origin, UrlCore::parse(rest)))
            }
            UrlKind::Opaque { scheme } => Err(Error::NonHierarchical {
                input: input.to_owned(),
                scheme,
            }),
            UrlKind::Root | UrlKind::Relative => Err(Error::InvalidUrl {
                input: input.to_owned(),
                reason: "missing scheme".into(),
            }),
        }
    }

    /// The scheme and authority.
    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The same pathname and decorations under another origin.
    #[must_use]
    pub fn replace_origin(&self, origin: Origin) -> Self {
        Self::assemble(origin, self.core.clone())
    }

    /// The pathname and decorations without the origin.
    #[must_use]
    pub fn root_path(&self) -> RootPathUrl {
        RootPathUrl::from_core(self.core.clone())
    }

    /// Convert to a [`url::Url`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for a scheme-relative URL, or if the
    /// `url` crate rejects the string.
    pub fn to_url(&self) -> Result<Url> {
        if self.origin.is_scheme_relative() {
            return Err(Error::InvalidUrl {
                input: self.href.clone(),
                reason: "scheme-relative URL has no scheme".into(),
            });
        }
        Url::parse(&self.href).map_err(|err| Error::InvalidUrl {
            input: self.href.clone(),
            reason: err.to_string(),
        })
    }

    /// Resolve one part against this URL.
    ///
    /// A part with its own origin replaces everything, a rooted part keeps
    /// only the origin and anything else is joined. The scheme of `self` is
    /// always treated as hierarchical.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonHierarchical`] for an opaque scheme, or an origin
    /// error for a malformed full URL part.
    pub fn resolve<P: AsRef<str>>(&self, part: P) -> Result<Self> {
        self.resolve_with(part, &SchemePolicy::standard())
    }

    /// [`resolve`](Self::resolve) against a custom scheme policy.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with<P: AsRef<str>>(&self, part: P, policy: &SchemePolicy) -> Result<Self> {
        let part = part.as_ref();
        let policy = match self.origin.scheme() {
            Some(scheme) => policy.clone().with_scheme(scheme),
            None => policy.clone(),
        };

        match classify_with(part, &policy) {
            UrlKind::Relative => Ok(self.join(part)),
            UrlKind::Root => {
                log::trace!("resolve of {} restarted at {part}", self.href);
                Ok(Self::assemble(self.origin.clone(), UrlCore::parse(part)))
            }
            UrlKind::Full => {
                log::trace!("resolve of {} replaced by {part}", self.href);
                let (origin, rest) = split_origin(part, &policy)?;
                let origin = origin.or_scheme(self.origin.scheme());
                Ok(Self::assemble(origin, UrlCore::parse(rest)))
            }
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

    /// The relative path leading from `base` to this URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OriginMismatch`] if the origins differ.
    pub fn relative_to(&self, base: &FullPathUrl) -> Result<RelativePathUrl> {
        if self.origin != base.origin {
            return Err(Error::OriginMismatch {
                left: self.origin.to_string(),
                right: base.origin.to_string(),
            });
        }
        Ok(RelativePathUrl::from_core(self.core.relative_to(&base.core)))
    }

    /// Relationship of this URL to `other`, or `None` across origins.
    #[must_use]
    pub fn relationship(&self, other: &FullPathUrl) -> Option<PathRelationship> {
        (self.origin == other.origin)
            .then(|| PathRelationship::between(&self.core.segments(), &other.core.segments()))
    }

    /// Whether this URL lies strictly beneath `ancestor`. Always `false`
    /// across origins.
    #[must_use]
    pub fn descends_from(&self, ancestor: &FullPathUrl) -> bool {
        self.relationship(ancestor)
            .is_some_and(|relationship| relationship.is_descent(false))
    }

    /// Whether this URL is `ancestor` or lies beneath it.
    #[must_use]
    pub fn descends_from_inclusive(&self, ancestor: &FullPathUrl) -> bool {
        self.relationship(ancestor)
            .is_some_and(|relationship| relationship.is_descent(true))
    }

    fn assemble(origin: Origin, core: UrlCore) -> Self {
        let core = core.with_rooted(true);
        let href = format!("{origin}{}", core.render());
        Self { origin, core, href }
    }
}

impl sealed::Core for FullPathUrl {
    fn core(&self) -> &UrlCore {
        &self.core
    }

    fn with_core(&self, core: UrlCore) -> Self {
        Self::assemble(self.origin.clone(), core)
    }
}

impl UrlPathOps for FullPathUrl {}

impl TryFrom<Url> for FullPathUrl {
    type Error = Error;

    fn try_from(value: Url) -> Result<Self> {
        Self::new(value.as_str())
    }
}

impl TryFrom<&Url> for FullPathUrl {
    type Error = Error;

    fn try_from(value: &Url) -> Result<Self> {
        Self::new(value.as_str())
    }
}

impl_string_traits!(FullPathUrl);

#[cfg(test)]
mod tests {
    use super::*;

    fn full(input: &str) -> FullPathUrl {
        FullPathUrl::new(input).unwrap()
    }

    #[test]
    fn test_lowercases_scheme_and_host() {
        let url = full("HTTP://WWW.EXAMPLE.COM/Path/File.TXT");
        assert_eq!(url, "http://www.example.com/Path/File.TXT");
        assert_eq!(url.origin().host(), "www.example.com");
    }

    #[test]
    fn test_empty_pathname_is_root() {
        assert_eq!(full("https://x.com"), "https://x.com/");
        assert_eq!(full("https://x.com?a=1"), "https://x.com/?a=1");
        assert!(full("https://x.com").is_directory());
    }

    #[test]
    fn test_file_urls() {
        let url = full("file:///etc/hosts");
        assert_eq!(url, "file:///etc/hosts");
        assert_eq!(url.filename().unwrap(), "hosts");
    }

    #[test]
    fn test_constructor_errors() {
        let err = FullPathUrl::new("mailto:someone@example.com").unwrap_err();
        assert!(err.to_string().contains("non-hierarchical"));
        let err = FullPathUrl::new("not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid URL"));
        let err = FullPathUrl::new("http://bad host/").unwrap_err();
        assert!(err.to_string().contains("Invalid origin"));
        assert!(matches!(FullPathUrl::new("/a/b"), Err(Error::InvalidUrl { .. })));
        assert!(matches!(FullPathUrl::new("https:/a"), Err(Error::InvalidOrigin { .. })));
    }

    #[test]
    fn test_custom_scheme_policy() {
        let policy = SchemePolicy::standard().with_scheme("s3");
        let url = FullPathUrl::parse_with("S3://bucket/key/data.csv", &policy).unwrap();
        assert_eq!(url, "s3://bucket/key/data.csv");
        assert!(FullPathUrl::new("s3://bucket/key").is_err());

        // The receiver's own scheme stays hierarchical when resolving
        let other = url.resolve("s3://other/x").unwrap();
        assert_eq!(other, "s3://other/x");
    }

    #[test]
    fn test_join_merges_decorations() {
        let url = full("https://x.com/foo?a=a1&b=b1#old");
        assert_eq!(
            url.join("bar?b=b2&c=c2#new"),
            "https://x.com/foo/bar?a=a1&b=b2&c=c2#new"
        );
        assert_eq!(url.join("https://y.com/z"), "https://x.com/foo/https%3A/y.com/z?a=a1&b=b1#old");
    }

    #[test]
    fn test_resolve_state_machine() {
        let url = full("https://x.com/a/b?q=1#f");
        assert_eq!(url.resolve("c").unwrap(), "https://x.com/a/b/c?q=1#f");
        assert_eq!(url.resolve("/c?r=2").unwrap(), "https://x.com/c?r=2");
        assert_eq!(url.resolve("http://y.org/d#g").unwrap(), "http://y.org/d#g");
        assert_eq!(
            url.resolve_all(["/root/", "http://z.net/", "e", "/f"]).unwrap(),
            "http://z.net/f"
        );
        assert!(matches!(url.resolve("mailto:a@b.c"), Err(Error::NonHierarchical { .. })));
    }

    #[test]
    fn test_resolve_identity() {
        let url = full("https://x.com/a?q=1#f");
        assert_eq!(url.resolve("").unwrap(), url);
        let none: [&str; 0] = [];
        assert_eq!(url.resolve_all(none).unwrap(), url);
    }

    #[test]
    fn test_replace_origin_and_root_path() {
        let url = full("https://x.com/a/b?q=1");
        let moved = url.replace_origin("http://mirror.org:8080".parse().unwrap());
        assert_eq!(moved, "http://mirror.org:8080/a/b?q=1");
        assert_eq!(url.root_path(), "/a/b?q=1");
    }

    #[test]
    fn test_relative_to_same_origin() {
        let base = full("https://x.com/docs/");
        let page = full("https://x.com/docs/api/index.html#top");
        assert_eq!(page.relative_to(&base).unwrap(), "api/index.html#top");
        assert!(page.descends_from(&base));
        assert!(!base.descends_from(&base));
        assert!(base.descends_from_inclusive(&base));
    }

    #[test]
    fn test_cross_origin() {
        let a = full("https://x.com/docs/a");
        let b = full("https://y.com/docs/");
        assert!(matches!(a.relative_to(&b), Err(Error::OriginMismatch { .. })));
        assert!(!a.descends_from(&b));
        assert_eq!(a.relationship(&b), None);
    }

    #[test]
    fn test_url_interop() {
        let url = full("https://x.com/a%20b/?q=1");
        let native = url.to_url().unwrap();
        assert_eq!(native.path(), "/a%20b/");
        assert_eq!(native.query(), Some("q=1"));

        let back = FullPathUrl::try_from(&native).unwrap();
        assert_eq!(back, url);

        let native = Url::parse("https://example.com").unwrap();
        assert_eq!(FullPathUrl::try_from(native).unwrap(), "https://example.com/");
    }

    #[test]
    fn test_scheme_relative_has_no_native_url() {
        let url = full("//cdn.com/lib.js");
        assert_eq!(url, "//cdn.com/lib.js");
        assert!(url.to_url().is_err());
    }

    #[test]
    fn test_filename_ops_keep_origin() {
        let url = full("https://x.com/img/a.png");
        assert_eq!(url.replace_extension("webp").unwrap(), "https://x.com/img/a.webp");
        assert_eq!(url.parent(), "https://x.com/img/");
        assert!(url.parent().filename().is_err());
    }
}
