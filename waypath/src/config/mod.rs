//! Scheme policy configuration for waypath.
//!
//! URL classification needs to know which schemes are hierarchical
//! (`https:`) and which are opaque (`mailto:`). The built-in list covers
//! the common web schemes; this module lets a program extend or replace
//! it through:
//! - YAML configuration files (`waypath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of scheme names
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`WAYPATH_HIERARCHICAL_SCHEMES`, `WAYPATH_EXTRA_SCHEMES`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. A discovered `waypath.yaml`
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use waypath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let policy = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Using a policy for classification:
//!
//! ```
//! use waypath::config::SchemePolicy;
//! use waypath::url::path_url_with;
//!
//! let policy = SchemePolicy::standard().with_scheme("s3");
//! let url = path_url_with("s3://bucket/key/", &policy).unwrap();
//! assert!(url.is_directory());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{SchemePolicy, UrlConfig};
pub use validator::ConfigValidator;
