//! Operations shared by every URL path variant.

use super::base::UrlCore;
use super::encoding::encode_segment;
use super::parts::UrlParts;
use super::query::Query;
use crate::error::{Error, Result};
use crate::path::filename::{split_name, Filename};
use crate::path::normalize::NormalForm;

pub(crate) mod sealed {
    use super::UrlCore;

    /// Access to the shared record and a same-kind rebuild.
    pub trait Core: Sized {
        /// The record behind this value.
        fn core(&self) -> &UrlCore;

        /// A value of the same kind around `core`, forcing the rootedness
        /// (and origin) of `self`.
        fn with_core(&self, core: UrlCore) -> Self;
    }
}

/// Decomposition, composition and decoration editing for URL paths.
///
/// Every method returns a new value. Filename accessors fail on directory
/// paths, which end with `/` (or are exactly `/` or `.`).
///
/// # Examples
///
/// ```
/// use waypath::url::{RootPathUrl, UrlPathOps};
///
/// let page = RootPathUrl::new("/docs/guide.html?lang=en#intro").unwrap();
/// assert_eq!(page.filename().unwrap().as_str(), "guide.html");
/// assert_eq!(page.parent().href(), "/docs/");
/// assert_eq!(page.replace_extension("md").unwrap().href(), "/docs/guide.md?lang=en#intro");
/// assert_eq!(page.remove_query().remove_fragment().href(), "/docs/guide.html");
/// ```
pub trait UrlPathOps: sealed::Core + Clone + AsRef<str> {
    /// The canonical encoded string.
    #[must_use]
    fn href(&self) -> &str {
        self.as_ref()
    }

    /// The encoded pathname, with its trailing slash if it is a directory.
    #[must_use]
    fn pathname(&self) -> String {
        self.core().pathname().to_pathname_string()
    }

    /// The encoded pathname segments.
    #[must_use]
    fn segments(&self) -> Vec<&str> {
        self.core().segments()
    }

    /// Query parameters; `None` when there is no `?`.
    #[must_use]
    fn query(&self) -> Option<&Query> {
        self.core().query()
    }

    /// Decoded fragment; `None` when there is no `#`.
    #[must_use]
    fn fragment(&self) -> Option<&str> {
        self.core().fragment()
    }

    /// Whether the pathname ends with `/`, or is exactly `/` or `.`.
    #[must_use]
    fn is_directory(&self) -> bool {
        self.core().pathname().is_directory()
    }

    /// The last segment, in encoded form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory.
    fn filename(&self) -> Result<Filename> {
        self.file_segment().map(Filename::from_segment)
    }

    /// The filename without its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory.
    fn stem(&self) -> Result<&str> {
        self.file_segment().map(|name| split_name(name).0)
    }

    /// The filename extension with its `.`, or `""`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory.
    fn extension(&self) -> Result<&str> {
        self.file_segment().map(|name| split_name(name).1)
    }

    /// The directory containing this path. Query and fragment are dropped.
    #[must_use]
    fn parent(&self) -> Self {
        self.with_core(self.core().parent())
    }

    /// Append a reference.
    ///
    /// The pathname is appended even if it starts with `/`, the query is
    /// merged key by key and a non-empty fragment replaces the current one.
    /// Joining a part that ends with `/` yields a directory.
    #[must_use]
    fn join<P: AsRef<str>>(&self, part: P) -> Self {
        let parts = UrlParts::parse(part.as_ref());
        self.with_core(self.core().join(&parts))
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

    /// Drop the trailing slash. `/` and `.` are left alone.
    #[must_use]
    fn un_directory(&self) -> Self {
        let pathname = self.core().pathname().with_directory(false);
        self.with_core(self.core().with_pathname(pathname))
    }

    /// Replace the filename, keeping parent and decorations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory, or a
    /// filename error if `name` is invalid.
    fn replace_filename(&self, name: &str) -> Result<Self> {
        self.file_segment()?;
        let name = Filename::new(name)?;
        Ok(self.with_last(&name))
    }

    /// Replace the stem of the filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory, or a
    /// filename error if the result is invalid.
    fn replace_stem(&self, stem: &str) -> Result<Self> {
        let name = self.filename()?.replace_stem(stem)?;
        Ok(self.with_last(&name))
    }

    /// Replace the extension of the filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory, or a
    /// filename error if the result is invalid.
    fn replace_extension(&self, extension: &str) -> Result<Self> {
        let name = self.filename()?.replace_extension(extension)?;
        Ok(self.with_last(&name))
    }

    /// Apply a function to the filename and re-validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory, or a
    /// filename error if the result is invalid.
    fn transform_filename<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&str) -> String,
    {
        let name = self.filename()?.transform(f)?;
        Ok(self.with_last(&name))
    }

    /// Move the last segment under a new parent.
    ///
    /// Query, fragment, directory flag and rootedness all come from `self`;
    /// only the pathname of `new_parent` is used.
    #[must_use]
    fn replace_parent<P: AsRef<str>>(&self, new_parent: P) -> Self {
        let parent = UrlParts::parse(new_parent.as_ref()).pathname;
        let current = self.core().pathname();
        let raw = match current.last() {
            Some(last) => format!("{parent}/{last}"),
            None => parent,
        };
        let pathname = NormalForm::parse(&raw).with_directory(current.is_directory());
        self.with_core(self.core().with_pathname(pathname))
    }

    /// Replace the whole query. An empty query renders as a bare `?`.
    #[must_use]
    fn replace_query<Q: Into<Query>>(&self, query: Q) -> Self {
        self.with_core(self.core().with_query(Some(query.into())))
    }

    /// Merge parameters into the query, overwriting colliding keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::url::{QueryValue, RootPathUrl, UrlPathOps};
    ///
    /// let url = RootPathUrl::new("/foo?a=1&b=x").unwrap();
    /// let merged = url.merge_query([("b", QueryValue::from(["y", "z"])), ("c", "3".into())]);
    /// assert_eq!(merged.href(), "/foo?a=1&b=y&b=z&c=3");
    /// ```
    #[must_use]
    fn merge_query<Q: Into<Query>>(&self, query: Q) -> Self {
        let incoming = query.into();
        let merged = match self.query() {
            Some(current) => current.merge(&incoming),
            None => incoming,
        };
        self.with_core(self.core().with_query(Some(merged)))
    }

    /// Drop the query, including a bare `?`.
    #[must_use]
    fn remove_query(&self) -> Self {
        self.with_core(self.core().with_query(None))
    }

    /// Replace the fragment; one leading `#` is stripped.
    #[must_use]
    fn replace_fragment(&self, fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        self.with_core(self.core().with_fragment(Some(fragment.to_owned())))
    }

    /// Drop the fragment, including a bare `#`.
    #[must_use]
    fn remove_fragment(&self) -> Self {
        self.with_core(self.core().with_fragment(None))
    }

    /// The last segment of a non-directory path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryHasNoFilename`] on a directory.
    fn file_segment(&self) -> Result<&str> {
        let pathname = self.core().pathname();
        match pathname.last() {
            Some(last) if !pathname.is_directory() => Ok(last),
            _ => Err(Error::DirectoryHasNoFilename {
                path: self.href().to_owned(),
            }),
        }
    }

    /// Swap the last segment for `name`, encoding it.
    #[doc(hidden)]
    #[must_use]
    fn with_last(&self, name: &Filename) -> Self {
        let pathname = self.core().pathname().with_last(&encode_segment(name.as_str()));
        self.with_core(self.core().with_pathname(pathname))
    }
}
