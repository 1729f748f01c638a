#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # waypath
//!
//! Immutable, normalized path values for filesystems and URLs.
//!
//! Every value is validated and normalized when it is built, so two paths
//! that name the same location compare equal. Operations never mutate; they
//! return a new value.
//!
//! ## Core Types
//!
//! - [`AbsolutePath`] and [`RelativePath`]: `/`-separated filesystem paths
//! - [`Filename`]: a single path segment with stem and extension access
//! - [`FullPathUrl`], [`RootPathUrl`] and [`RelativePathUrl`]: URL paths
//!   with query and fragment
//! - [`PathUrl`] and [`path_url`]: build the right URL variant from a string
//! - [`SchemePolicy`]: which schemes count as hierarchical
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use waypath::{AbsolutePath, PathOps, RootPathUrl, UrlPathOps};
//!
//! let home = AbsolutePath::new("/home/user/").unwrap();
//! let config = home.resolve_all(["projects", "../.config/app.yaml"]);
//! assert_eq!(config.as_str(), "/home/user/.config/app.yaml");
//! assert_eq!(config.extension().unwrap(), ".yaml");
//!
//! let page = RootPathUrl::new("/docs/guide/?lang=en").unwrap();
//! assert_eq!(page.join("intro.html").href(), "/docs/guide/intro.html?lang=en");
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod url;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, SchemePolicy};
pub use error::{Error, Result};
pub use path::{AbsolutePath, Filename, PathOps, PathRelationship, RelativePath};
pub use crate::url::{
    classify, path_url, path_url_with, FullPathUrl, Origin, PathUrl, Query, QueryValue,
    RelativePathUrl, RootPathUrl, UrlKind, UrlPathOps,
};
