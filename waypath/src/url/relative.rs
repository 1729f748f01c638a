//! Relative URL paths.

use serde::{Deserialize, Serialize};

use super::base::UrlCore;
use super::ops::{sealed, UrlPathOps};
use super::origin::{classify, UrlKind};
use super::root::RootPathUrl;
use crate::error::{Error, Result};

/// A URL path with no origin and no leading `/`.
///
/// # Examples
///
/// ```
/// use waypath::url::{RelativePathUrl, UrlPathOps};
///
/// let link = RelativePathUrl::new("../img/./logo.png?v=2").unwrap();
/// assert_eq!(link.href(), "../img/logo.png?v=2");
/// assert_eq!(link.stem().unwrap(), "logo");
///
/// assert!(RelativePathUrl::new("/img/logo.png").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePathUrl {
    core: UrlCore,
    href: String,
}

impl RelativePathUrl {
    /// Parse a relative URL path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MustBeRelative`] if the input starts with `/` or
    /// carries an origin, and [`Error::NonHierarchical`] for an opaque
    /// scheme.
    pub fn new(input: impl AsRef<str>) -> Result<Self> {
        let input = input.as_ref();
        match classify(input) {
            UrlKind::Relative => Ok(Self::from_core(UrlCore::parse(input))),
            UrlKind::Root | UrlKind::Full => Err(Error::MustBeRelative {
                path: input.to_owned(),
            }),
            UrlKind::Opaque { scheme } => Err(Error::NonHierarchical {
                input: input.to_owned(),
                scheme,
            }),
        }
    }

    /// The empty relative path, `.`.
    #[must_use]
    pub fn current() -> Self {
        Self::from_core(UrlCore::default())
    }

    /// Anchor this path under a root URL path.
    #[must_use]
    pub fn resolve_against(&self, base: &RootPathUrl) -> RootPathUrl {
        base.join(self)
    }

    pub(crate) fn from_core(core: UrlCore) -> Self {
        let core = core.with_rooted(false);
        let href = core.render();
        Self { core, href }
    }
}

impl sealed::Core for RelativePathUrl {
    fn core(&self) -> &UrlCore {
        &self.core
    }

    fn with_core(&self, core: UrlCore) -> Self {
        Self::from_core(core)
    }
}

impl UrlPathOps for RelativePathUrl {}

impl Default for RelativePathUrl {
    fn default() -> Self {
        Self::current()
    }
}

impl_string_traits!(RelativePathUrl);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{Query, QueryValue};

    fn rel(input: &str) -> RelativePathUrl {
        RelativePathUrl::new(input).unwrap()
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(rel(""), ".");
        assert_eq!(rel("./a/.."), ".");
        assert!(rel("").is_directory());
        assert_eq!(RelativePathUrl::current(), rel("."));
    }

    #[test]
    fn test_trailing_slash_is_directory() {
        let dir = rel("a/b/////");
        assert_eq!(dir, "a/b/");
        assert!(dir.is_directory());
        assert!(!rel("a/b").is_directory());
        assert_eq!(rel("a/b/..").href(), "a/");
    }

    #[test]
    fn test_rejects_rooted_and_origins() {
        assert!(matches!(RelativePathUrl::new("/a"), Err(Error::MustBeRelative { .. })));
        assert!(matches!(RelativePathUrl::new("//cdn.com/a"), Err(Error::MustBeRelative { .. })));
        assert!(matches!(RelativePathUrl::new("http://x.com"), Err(Error::MustBeRelative { .. })));
        assert!(matches!(RelativePathUrl::new("mailto:a@b"), Err(Error::NonHierarchical { .. })));
    }

    #[test]
    fn test_decorations_only() {
        let url = rel("?a=1#top");
        assert_eq!(url.pathname(), ".");
        assert_eq!(url.query().and_then(|query| query.get("a")), Some(&QueryValue::from("1")));
        assert_eq!(url.fragment(), Some("top"));
    }

    #[test]
    fn test_join_stays_relative() {
        let url = rel("a/b");
        assert_eq!(url.join("/c"), "a/b/c");
        assert_eq!(url.join("../../../x"), "../x");
        assert_eq!(url.join_all(["c/", "d"]), "a/b/c/d");
    }

    #[test]
    fn test_filename_on_directory_fails() {
        let err = rel("docs/").filename().unwrap_err();
        assert!(err.is_directory_error());
        assert!(err.to_string().contains("directory"));
        assert!(rel(".").stem().is_err());
    }

    #[test]
    fn test_un_directory() {
        assert_eq!(rel("a/b/").un_directory(), "a/b");
        assert_eq!(rel("a/b").un_directory(), "a/b");
        assert_eq!(rel(".").un_directory(), ".");
    }

    #[test]
    fn test_replace_parent_strips_root() {
        let url = rel("old/f.txt?x=1#y");
        assert_eq!(url.replace_parent("/new/dir"), "new/dir/f.txt?x=1#y");
        assert_eq!(rel("old/sub/").replace_parent("n"), "n/sub/");
    }

    #[test]
    fn test_query_editing() {
        let url = rel("a?x=1");
        assert_eq!(url.replace_query(Query::new()), "a?");
        assert_eq!(url.remove_query(), "a");
        assert_eq!(url.merge_query([("y", "2")]), "a?x=1&y=2");
        assert_eq!(rel("a").merge_query([("y", "2")]), "a?y=2");
    }

    #[test]
    fn test_fragment_editing() {
        let url = rel("a");
        assert_eq!(url.replace_fragment("#top"), "a#top");
        assert_eq!(url.replace_fragment("##x"), "a#%23x");
        assert_eq!(url.replace_fragment("top").remove_fragment(), "a");
    }

    #[test]
    fn test_resolve_against() {
        let base = RootPathUrl::new("/site/").unwrap();
        assert_eq!(rel("page.html?x=1").resolve_against(&base), "/site/page.html?x=1");
    }

    #[test]
    fn test_serde_as_string() {
        let url = rel("a b/c?q=1");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, "\"a%20b/c?q=1\"");
        let back: RelativePathUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }
}
