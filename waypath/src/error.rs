//! Error types for the waypath library.
//!
//! Every failure in this crate is a local validation failure raised at the
//! point of the offending call. Nothing is retried or recovered internally,
//! and a receiver is never left half-updated because every value is
//! immutable.

use thiserror::Error;

/// Result type alias for operations that may fail with a waypath error.
///
/// # Examples
///
/// ```
/// use waypath::{AbsolutePath, Result};
///
/// fn config_dir() -> Result<AbsolutePath> {
///     AbsolutePath::new("/etc/waypath")
/// }
/// # assert!(config_dir().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the waypath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A relative-looking string was given where an absolute path is required.
    #[error("invalid path '{path}': must be absolute")]
    MustBeAbsolute {
        /// The offending input.
        path: String,
    },

    /// An absolute-looking string was given where a relative path is required.
    #[error("invalid path '{path}': must be relative")]
    MustBeRelative {
        /// The offending input.
        path: String,
    },

    /// A filename was built from a string containing a separator.
    #[error("invalid filename '{name}': must not contain path components")]
    FilenameHasSeparator {
        /// The offending input.
        name: String,
    },

    /// A filename was built from `.` or `..`, which navigate instead of
    /// naming an entry.
    #[error("invalid filename '{name}': '.' and '..' are not filenames")]
    FilenameIsNavigation {
        /// The offending input.
        name: String,
    },

    /// A filename was built from the empty string.
    #[error("invalid filename: must not be empty")]
    EmptyFilename,

    /// A filename operation was applied to a path with no segments.
    #[error("path '{path}' has no filename")]
    MissingFilename {
        /// The path that has no filename.
        path: String,
    },

    /// A filename operation was applied to a directory URL path.
    #[error("'{path}' is a directory and has no filename")]
    DirectoryHasNoFilename {
        /// The directory path.
        path: String,
    },

    /// A URL uses an opaque scheme such as `mailto:`.
    #[error("'{input}' is a non-hierarchical URL (scheme '{scheme}')")]
    NonHierarchical {
        /// The offending input.
        input: String,
        /// The scheme that was found, without its colon.
        scheme: String,
    },

    /// The input could not be understood as a URL at all.
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl {
        /// The offending input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A hierarchical URL carried a malformed scheme or authority.
    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin {
        /// The offending origin text.
        origin: String,
        /// Why the origin was rejected.
        reason: String,
    },

    /// Two full URLs with different origins were compared.
    #[error("origin mismatch: '{left}' and '{right}'")]
    OriginMismatch {
        /// Origin of the receiver.
        left: String,
        /// Origin of the argument.
        right: String,
    },

    /// A URL with an origin was given where only a rooted path is accepted.
    #[error("'{input}' carries an origin, which a root URL path cannot hold")]
    UnexpectedOrigin {
        /// The offending input.
        input: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error reports a filename operation on a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::Error;
    ///
    /// let err = Error::DirectoryHasNoFilename { path: "/docs/".into() };
    /// assert!(err.is_directory_error());
    /// ```
    #[must_use]
    pub fn is_directory_error(&self) -> bool {
        matches!(self, Self::DirectoryHasNoFilename { .. })
    }

    /// Check if the error reports an opaque (non-hierarchical) URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::Error;
    ///
    /// let err = Error::NonHierarchical {
    ///     input: "mailto:me@example.com".into(),
    ///     scheme: "mailto".into(),
    /// };
    /// assert!(err.is_non_hierarchical());
    /// ```
    #[must_use]
    pub fn is_non_hierarchical(&self) -> bool {
        matches!(self, Self::NonHierarchical { .. })
    }

    /// Check if the error reports a path of the wrong absoluteness.
    #[must_use]
    pub fn is_wrong_absoluteness(&self) -> bool {
        matches!(self, Self::MustBeAbsolute { .. } | Self::MustBeRelative { .. })
    }

    /// Check if the error comes from the configuration layer.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Configuration(_) | Self::Io(_)
        )
    }
}
