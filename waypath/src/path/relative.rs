//! Relative plain paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use super::ops::{sealed, PathOps};
use super::AbsolutePath;
use crate::error::{Error, Result};

/// A normalized relative path.
///
/// # Invariants
/// - The string never starts with `/` and never ends with `/`.
/// - No segment is `.`; `..` only appears as a leading run.
/// - The empty path is `.`.
///
/// # Examples
///
/// ```
/// use waypath::{PathOps, RelativePath};
///
/// let path = RelativePath::new("./foo/../bar/./baz.txt/").unwrap();
/// assert_eq!(path.as_str(), "bar/baz.txt");
/// assert_eq!(path.extension(), Some(".txt"));
///
/// assert!(RelativePath::new("/etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePath {
    path: String,
}

impl RelativePath {
    /// Parse and normalize a relative path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MustBeRelative`] if the input starts with `/`.
    pub fn new(path: impl AsRef<str>) -> Result<Self> {
        let path = path.as_ref();
        if path.starts_with('/') {
            return Err(Error::MustBeRelative {
                path: path.to_owned(),
            });
        }
        Ok(Self {
            path: normalize(path),
        })
    }

    /// The current directory, `.`.
    #[must_use]
    pub fn current() -> Self {
        Self {
            path: ".".to_string(),
        }
    }

    /// Whether this is `.`.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.path == "."
    }

    /// Whether the path climbs out of its starting directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::RelativePath;
    ///
    /// assert!(RelativePath::new("../sibling").unwrap().escapes());
    /// assert!(!RelativePath::new("child/..").unwrap().escapes());
    /// ```
    #[must_use]
    pub fn escapes(&self) -> bool {
        self.path == ".." || self.path.starts_with("../")
    }

    /// Anchor this path under an absolute base.
    #[must_use]
    pub fn resolve_against(&self, base: &AbsolutePath) -> AbsolutePath {
        base.join(self)
    }
}

impl sealed::Rebuild for RelativePath {
    fn rebuild(&self, raw: &str) -> Self {
        Self {
            path: normalize(raw.trim_start_matches('/')),
        }
    }
}

impl PathOps for RelativePath {}

impl Default for RelativePath {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for RelativePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RelativePath> for String {
    fn from(value: RelativePath) -> Self {
        value.path
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<std::path::Path> for RelativePath {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.path)
    }
}

impl PartialEq<str> for RelativePath {
    fn eq(&self, other: &str) -> bool {
        self.path == other
    }
}

impl PartialEq<&str> for RelativePath {
    fn eq(&self, other: &&str) -> bool {
        self.path == *other
    }
}
