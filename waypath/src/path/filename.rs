//! The filename model: a single path segment split into stem and extension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single, separator-free path segment.
///
/// The extension starts at the last `.` that is not the first character, so
/// dotfiles keep their leading dot in the stem. Names made only of dots
/// have no extension.
///
/// # Examples
///
/// ```
/// use waypath::Filename;
///
/// let name = Filename::new("archive.tar.gz").unwrap();
/// assert_eq!(name.stem(), "archive.tar");
/// assert_eq!(name.extension(), ".gz");
///
/// let dotfile = Filename::new(".env.local").unwrap();
/// assert_eq!(dotfile.stem(), ".env");
/// assert_eq!(dotfile.extension(), ".local");
///
/// assert!(Filename::new("a/b").is_err());
/// assert!(Filename::new("..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Filename {
    name: String,
}

impl Filename {
    /// Create a filename, rejecting empty strings, strings containing `/`
    /// and the navigation segments `.` and `..`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilenameHasSeparator`] if the name contains a
    /// separator, [`Error::FilenameIsNavigation`] for `.` or `..`, or
    /// [`Error::EmptyFilename`] if it is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyFilename);
        }
        if name.contains('/') {
            return Err(Error::FilenameHasSeparator { name });
        }
        if name == "." || name == ".." {
            return Err(Error::FilenameIsNavigation { name });
        }
        Ok(Self { name })
    }

    /// Wrap a segment produced by the normalizer, which never holds `/`.
    pub(crate) fn from_segment(segment: &str) -> Self {
        debug_assert!(!segment.is_empty() && !segment.contains('/'));
        Self {
            name: segment.to_owned(),
        }
    }

    /// The whole filename.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume the filename, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.name
    }

    /// Everything before the extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        split_name(&self.name).0
    }

    /// The extension including its leading `.`, or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        split_name(&self.name).1
    }

    /// Replace the stem, keeping the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not a valid filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::Filename;
    ///
    /// let name = Filename::new("report.pdf").unwrap();
    /// assert_eq!(name.replace_stem("summary").unwrap().as_str(), "summary.pdf");
    /// ```
    pub fn replace_stem(&self, stem: &str) -> Result<Self> {
        Self::new(format!("{stem}{}", self.extension()))
    }

    /// Replace the extension, keeping the stem.
    ///
    /// The new extension may be given with or without its leading `.`; an
    /// empty extension removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not a valid filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::Filename;
    ///
    /// let name = Filename::new("photo.png").unwrap();
    /// assert_eq!(name.replace_extension("jpg").unwrap().as_str(), "photo.jpg");
    /// assert_eq!(name.replace_extension(".jpg").unwrap().as_str(), "photo.jpg");
    /// assert_eq!(name.replace_extension("").unwrap().as_str(), "photo");
    /// ```
    pub fn replace_extension(&self, extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            Self::new(self.stem())
        } else {
            Self::new(format!("{}.{extension}", self.stem()))
        }
    }

    /// Apply an arbitrary function to the whole name and re-validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformed name is not a valid filename.
    pub fn transform<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&str) -> String,
    {
        Self::new(f(&self.name))
    }
}

/// Split a name into stem and extension.
pub(crate) fn split_name(name: &str) -> (&str, &str) {
    if name.bytes().all(|b| b == b'.') {
        return (name, "");
    }
    match name.rfind('.') {
        Some(index) if index > 0 => name.split_at(index),
        _ => (name, ""),
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Filename {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Filename {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Filename {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Filename> for String {
    fn from(value: Filename) -> Self {
        value.name
    }
}

impl AsRef<str> for Filename {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl PartialEq<str> for Filename {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Filename {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        let name = Filename::new("index.ts").unwrap();
        assert_eq!(name.stem(), "index");
        assert_eq!(name.extension(), ".ts");
    }

    #[test]
    fn test_no_extension() {
        let name = Filename::new("Makefile").unwrap();
        assert_eq!(name.stem(), "Makefile");
        assert_eq!(name.extension(), "");
    }

    #[test]
    fn test_dotfiles() {
        let name = Filename::new(".gitignore").unwrap();
        assert_eq!(name.stem(), ".gitignore");
        assert_eq!(name.extension(), "");

        let name = Filename::new(".env.local").unwrap();
        assert_eq!(name.stem(), ".env");
        assert_eq!(name.extension(), ".local");
    }

    #[test]
    fn test_only_dots() {
        let name = Filename::new("...").unwrap();
        assert_eq!(name.stem(), "...");
        assert_eq!(name.extension(), "");
    }

    #[test]
    fn test_rejects_navigation() {
        for dots in [".", ".."] {
            let err = Filename::new(dots).unwrap_err();
            assert!(matches!(err, Error::FilenameIsNavigation { .. }));
        }
        let name = Filename::new("a.").unwrap();
        assert!(matches!(name.replace_stem(""), Err(Error::FilenameIsNavigation { .. })));
        assert!(name.transform(|_| "..".to_string()).is_err());
    }

    #[test]
    fn test_trailing_dot() {
        let name = Filename::new("file.").unwrap();
        assert_eq!(name.stem(), "file");
        assert_eq!(name.extension(), ".");
    }

    #[test]
    fn test_rejects_separator() {
        let err = Filename::new("dir/file.txt").unwrap_err();
        assert!(matches!(err, Error::FilenameHasSeparator { .. }));
        assert!(err.to_string().contains("must not contain path components"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Filename::new(""), Err(Error::EmptyFilename)));
    }

    #[test]
    fn test_replace_stem() {
        let name = Filename::new(".env.local").unwrap();
        assert_eq!(name.replace_stem(".config").unwrap(), ".config.local");
        assert!(name.replace_stem("a/b").is_err());
    }

    #[test]
    fn test_replace_extension_variants() {
        let name = Filename::new("photo.png").unwrap();
        assert_eq!(name.replace_extension("jpg").unwrap(), "photo.jpg");
        assert_eq!(name.replace_extension(".jpg").unwrap(), "photo.jpg");
        assert_eq!(name.replace_extension("..jpg").unwrap(), "photo.jpg");
        assert_eq!(name.replace_extension("").unwrap(), "photo");

        let bare = Filename::new("README").unwrap();
        assert_eq!(bare.replace_extension("md").unwrap(), "README.md");
    }

    #[test]
    fn test_transform_revalidates() {
        let name = Filename::new("draft.md").unwrap();
        let upper = name.transform(str::to_uppercase).unwrap();
        assert_eq!(upper, "DRAFT.MD");

        let err = name.transform(|n| format!("nested/{n}")).unwrap_err();
        assert!(matches!(err, Error::FilenameHasSeparator { .. }));
    }

    #[test]
    fn test_equality_is_string_equality() {
        assert_eq!(Filename::new("a.txt").unwrap(), Filename::new("a.txt").unwrap());
        assert_ne!(Filename::new("a.txt").unwrap(), Filename::new("A.txt").unwrap());
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let name = Filename::new("data.json").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"data.json\"");
        let back: Filename = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        let bad: std::result::Result<Filename, _> = serde_json::from_str("\"a/b\"");
        assert!(bad.is_err());
    }
}
