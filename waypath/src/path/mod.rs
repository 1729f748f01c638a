//! Plain filesystem-style paths.
//!
//! This module provides the immutable path values used throughout waypath,
//! together with the segment normalizer they are built on.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every path is normalized on construction:
//! - Repeated separators collapse
//! - `.` segments are dropped
//! - `..` segments consume the previous segment, never climbing past `/`
//! - The trailing slash is dropped
//!
//! The empty relative path is `.` and the empty absolute path is `/`.
//!
//! ## Join and Resolve
//!
//! Joining always appends, even a part that starts with `/`. Resolving (on
//! [`AbsolutePath`] only) restarts from any absolute part, discarding what
//! came before it.
//!
//! # Examples
//!
//! ```
//! use waypath::path::{AbsolutePath, PathOps, PathRelationship};
//!
//! let project = AbsolutePath::new("/home/user/project").unwrap();
//! let source = project.join("src/../src/lib.rs");
//! assert_eq!(source.as_str(), "/home/user/project/src/lib.rs");
//!
//! assert_eq!(source.relative_to(&project).as_str(), "src/lib.rs");
//! assert_eq!(project.relationship(&source), PathRelationship::Ancestor);
//! ```

mod absolute;
pub(crate) mod filename;
pub mod normalize;
mod ops;
pub mod relationship;
mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use absolute::AbsolutePath;
pub use filename::Filename;
pub use normalize::{normalize, NormalForm};
pub use ops::PathOps;
pub use relationship::PathRelationship;
pub use relative::RelativePath;
