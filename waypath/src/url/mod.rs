//! URL paths with decorations.
//!
//! This module models hierarchical URLs as three immutable variants:
//!
//! - [`RelativePathUrl`]: `../img/logo.png?v=2`
//! - [`RootPathUrl`]: `/docs/guide/#install`
//! - [`FullPathUrl`]: `https://example.com/docs/`
//!
//! # Key Concepts
//!
//! ## Directories
//!
//! Unlike plain paths, a URL pathname keeps one trailing slash as a
//! directory marker. Directories have no filename, so filename operations
//! on them fail.
//!
//! ## Absent and Empty Decorations
//!
//! `/a`, `/a?` and `/a?#` are three different URLs. A missing query or
//! fragment is `None`; a bare `?` or `#` is an empty value.
//!
//! ## Encoding
//!
//! Pathname segments are kept encoded, while query parameters and the
//! fragment are decoded on parse. Output is re-encoded idempotently, so an
//! already-encoded input round-trips unchanged.
//!
//! # Examples
//!
//! ```
//! use waypath::url::{path_url, FullPathUrl, UrlPathOps};
//!
//! let page = FullPathUrl::new("https://example.com/docs/guide.html?lang=en").unwrap();
//! let asset = page.parent().join("img/diagram.png");
//! assert_eq!(asset.href(), "https://example.com/docs/img/diagram.png");
//!
//! let any = path_url("/search?q=rust%20paths").unwrap();
//! assert_eq!(any.query().unwrap().get("q").unwrap().first(), Some("rust paths"));
//! ```

/// String-facing impls shared by the URL path variants.
///
/// Equality and hashing go through the canonical `href`.
macro_rules! impl_string_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.href)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::Error;

            fn try_from(value: &str) -> $crate::error::Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::error::Error;

            fn try_from(value: String) -> $crate::error::Result<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.href
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.href
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.href == other.href
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.href, state);
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.href == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.href == *other
            }
        }
    };
}

mod base;
mod dispatch;
pub mod encoding;
mod full;
mod ops;
mod origin;
mod parts;
mod query;
mod relative;
mod root;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use dispatch::{path_url, path_url_with, PathUrl};
pub use full::FullPathUrl;
pub use ops::UrlPathOps;
pub use origin::{classify, classify_with, Origin, UrlKind};
pub use parts::UrlParts;
pub use query::{Query, QueryValue};
pub use relative::RelativePathUrl;
pub use root::RootPathUrl;
