//! Operations shared by [`RelativePath`](super::RelativePath) and
//! [`AbsolutePath`](super::AbsolutePath).

use super::filename::{split_name, Filename};
use super::normalize::{normalize, NormalForm};
use crate::error::{Error, Result};

pub(crate) mod sealed {
    /// Rebuilds a value of the implementing kind from a raw string.
    pub trait Rebuild: Sized {
        /// Normalize `raw` into a value of the same kind as `self`, forcing
        /// the absoluteness of `self` whatever `raw` looks like.
        fn rebuild(&self, raw: &str) -> Self;
    }
}

/// Decomposition and composition shared by the plain path types.
///
/// Every method returns a new value; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use waypath::{PathOps, RelativePath};
///
/// let path = RelativePath::new("src/lib.rs").unwrap();
/// assert_eq!(path.stem(), Some("lib"));
/// assert_eq!(path.parent().as_str(), "src");
/// assert_eq!(path.join("../main.rs").as_str(), "src/main.rs");
/// assert_eq!(path.replace_extension("md").unwrap().as_str(), "src/lib.md");
/// ```
pub trait PathOps: sealed::Rebuild + Clone + AsRef<str> {
    /// The normalized path string.
    #[must_use]
    fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// The normalized segments, without separators.
    ///
    /// `/` and `.` have no segments.
    #[must_use]
    fn segments(&self) -> Vec<&str> {
        self.as_str()
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    /// The last segment, if the path has any.
    #[must_use]
    fn last_segment(&self) -> Option<&str> {
        self.as_str()
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && *segment != ".")
    }

    /// The filename, or `None` for `/` and `.`.
    #[must_use]
    fn filename(&self) -> Option<Filename> {
        self.last_segment().map(Filename::from_segment)
    }

    /// The filename without its extension.
    #[must_use]
    fn stem(&self) -> Option<&str> {
        self.last_segment().map(|name| split_name(name).0)
    }

    /// The filename extension including its `.`, or `""` when there is none.
    #[must_use]
    fn extension(&self) -> Option<&str> {
        self.last_segment().map(|name| split_name(name).1)
    }

    /// The directory containing this path.
    ///
    /// The parent of `/` is `/` and the parent of `.` is `.`.
    #[must_use]
    fn parent(&self) -> Self {
        let form = NormalForm::parse(self.as_str()).parent();
        self.rebuild(&form.to_plain_string())
    }

    /// Append a part as relative segments and renormalize.
    ///
    /// Joining never discards the receiver: a part starting with `/` is
    /// still appended. Empty parts are skipped.
    #[must_use]
    fn join<P: AsRef<str>>(&self, part: P) -> Self {
        let part = part.as_ref();
        if part.is_empty() {
            return self.clone();
        }
        self.rebuild(&format!("{}/{part}", self.as_str()))
    }

    /// Join several parts in order.
    #[must_use]
    fn join_all<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parts
            .into_iter()
            .fold(self.clone(), |joined, part| joined.join(part))
    }

    /// Replace the filename, keeping the parent.
    ///
    /// On a path with no filename (`/` or `.`) the name is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid [`Filename`].
    fn replace_filename(&self, name: &str) -> Result<Self> {
        let name = Filename::new(name)?;
        Ok(self.parent().join(&name))
    }

    /// Replace the stem of the filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFilename`] if the path has no filename, or a
    /// filename error if the new name is invalid.
    fn replace_stem(&self, stem: &str) -> Result<Self> {
        let name = self.require_filename()?.replace_stem(stem)?;
        Ok(self.parent().join(&name))
    }

    /// Replace the extension of the filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFilename`] if the path has no filename, or a
    /// filename error if the new name is invalid.
    fn replace_extension(&self, extension: &str) -> Result<Self> {
        let name = self.require_filename()?.replace_extension(extension)?;
        Ok(self.parent().join(&name))
    }

    /// Apply a function to the filename and re-validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFilename`] if the path has no filename, or a
    /// filename error if the transformed name is invalid.
    fn transform_filename<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&str) -> String,
    {
        let name = self.require_filename()?.transform(f)?;
        Ok(self.parent().join(&name))
    }

    /// Move the last segment under a new parent.
    ///
    /// The result keeps the absoluteness of `self`, not of `new_parent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::{AbsolutePath, PathOps, RelativePath};
    ///
    /// let abs = AbsolutePath::new("/old/f.txt").unwrap();
    /// assert_eq!(abs.replace_parent("newdir").as_str(), "/newdir/f.txt");
    ///
    /// let rel = RelativePath::new("old/f.txt").unwrap();
    /// assert_eq!(rel.replace_parent("/newpath").as_str(), "newpath/f.txt");
    /// ```
    #[must_use]
    fn replace_parent<P: AsRef<str>>(&self, new_parent: P) -> Self {
        let new_parent = new_parent.as_ref();
        match self.last_segment() {
            Some(last) => self.rebuild(&format!("{new_parent}/{last}")),
            None => self.rebuild(new_parent),
        }
    }

    /// Compare against a raw string by normalized form.
    #[must_use]
    fn equals(&self, other: &str) -> bool {
        normalize(other) == self.as_str()
    }

    /// The filename, or [`Error::MissingFilename`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFilename`] for `/` and `.`.
    fn require_filename(&self) -> Result<Filename> {
        self.filename().ok_or_else(|| Error::MissingFilename {
            path: self.as_str().to_owned(),
        })
    }
}
