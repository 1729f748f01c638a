//! Absolute plain paths.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::{normalize, relative_segments};
use super::ops::{sealed, PathOps};
use super::relationship::PathRelationship;
use super::RelativePath;
use crate::error::{Error, Result};

/// A normalized absolute path.
///
/// This is the value handed to filesystem code: it is always rooted, never
/// has a trailing slash (except `/` itself) and never contains `.` or `..`.
///
/// # Examples
///
/// ```
/// use waypath::{AbsolutePath, PathOps};
///
/// let path = AbsolutePath::new("/foo/bar").unwrap();
/// let resolved = path.resolve_all(["demo1/src", "/etc/config", "index.ts"]);
/// assert_eq!(resolved.as_str(), "/etc/config/index.ts");
///
/// let base = AbsolutePath::new("/etc").unwrap();
/// assert_eq!(resolved.relative_to(&base).as_str(), "config/index.ts");
/// assert!(resolved.descends_from(&base));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsolutePath {
    path: String,
}

impl AbsolutePath {
    /// Parse and normalize an absolute path.
    ///
    /// The empty string normalizes to `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MustBeAbsolute`] if a non-empty input does not start
    /// with `/`.
    pub fn new(path: impl AsRef<str>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_empty() {
            return Ok(Self::root());
        }
        if !path.starts_with('/') {
            return Err(Error::MustBeAbsolute {
                path: path.to_owned(),
            });
        }
        Ok(Self {
            path: normalize(path),
        })
    }

    /// The filesystem root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    /// Whether this is `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Borrow as a [`std::path::Path`] for filesystem calls.
    #[must_use]
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Resolve a part against this path.
    ///
    /// A part starting with `/` discards everything accumulated so far;
    /// anything else is joined.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::{AbsolutePath, PathOps};
    ///
    /// let base = AbsolutePath::new("/srv/app").unwrap();
    /// assert_eq!(base.resolve("static").as_str(), "/srv/app/static");
    /// assert_eq!(base.resolve("/tmp").as_str(), "/tmp");
    /// ```
    #[must_use]
    pub fn resolve<P: AsRef<str>>(&self, part: P) -> Self {
        let part = part.as_ref();
        if part.starts_with('/') {
            log::trace!("resolve of {} restarted at {part}", self.path);
            Self {
                path: normalize(part),
            }
        } else {
            self.join(part)
        }
    }

    /// Resolve several parts in order; later absolute parts win.
    #[must_use]
    pub fn resolve_all<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parts
            .into_iter()
            .fold(self.clone(), |resolved, part| resolved.resolve(part))
    }

    /// The relative path leading from `base` to this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::{AbsolutePath, PathOps};
    ///
    /// let base = AbsolutePath::new("/a/b/c").unwrap();
    /// let target = AbsolutePath::new("/a/x").unwrap();
    /// assert_eq!(target.relative_to(&base).as_str(), "../../x");
    /// assert_eq!(base.relative_to(&base).as_str(), ".");
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &AbsolutePath) -> RelativePath {
        let segments = relative_segments(&base.segments(), &self.segments());
        RelativePath::current().join_all(segments)
    }

    /// Relationship of this path to `other`.
    #[must_use]
    pub fn relationship(&self, other: &AbsolutePath) -> PathRelationship {
        PathRelationship::between(&self.segments(), &other.segments())
    }

    /// Whether this path lies strictly beneath `ancestor`.
    ///
    /// A path never descends from itself; see
    /// [`descends_from_inclusive`](Self::descends_from_inclusive).
    #[must_use]
    pub fn descends_from(&self, ancestor: &AbsolutePath) -> bool {
        self.relationship(ancestor).is_descent(false)
    }

    /// Whether this path is `ancestor` or lies beneath it.
    #[must_use]
    pub fn descends_from_inclusive(&self, ancestor: &AbsolutePath) -> bool {
        self.relationship(ancestor).is_descent(true)
    }
}

impl sealed::Rebuild for AbsolutePath {
    fn rebuild(&self, raw: &str) -> Self {
        Self {
            path: normalize(&format!("/{raw}")),
        }
    }
}

impl PathOps for AbsolutePath {}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AbsolutePath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AbsolutePath> for String {
    fn from(value: AbsolutePath) -> Self {
        value.path
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_std_path()
    }
}

impl PartialEq<str> for AbsolutePath {
    fn eq(&self, other: &str) -> bool {
        self.path == other
    }
}

impl PartialEq<&str> for AbsolutePath {
    fn eq(&self, other: &&str) -> bool {
        self.path == *other
    }
}
