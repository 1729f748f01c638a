//! Configuration schema definitions.
//!
//! This module defines the on-disk configuration structure and the
//! resolved [`SchemePolicy`] that URL classification consults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Schemes treated as hierarchical when nothing else is configured.
pub const STANDARD_SCHEMES: [&str; 7] = ["http", "https", "ftp", "ftps", "ws", "wss", "file"];

/// Scheme configuration as written in a YAML file.
///
/// # Examples
///
/// ```
/// use waypath::config::UrlConfig;
///
/// let config = UrlConfig {
///     extra_hierarchical_schemes: Some(vec!["s3".to_string()]),
///     ..Default::default()
/// };
/// assert!(config.hierarchical_schemes.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UrlConfig {
    /// Replaces the built-in list of hierarchical schemes.
    pub hierarchical_schemes: Option<Vec<String>>,

    /// Schemes added on top of the base list.
    pub extra_hierarchical_schemes: Option<Vec<String>>,
}

/// The set of schemes whose URLs carry an authority and a path.
///
/// Any scheme outside the set is opaque: `mailto:`, `data:` and friends
/// are rejected by the URL constructors.
///
/// # Examples
///
/// ```
/// use waypath::config::SchemePolicy;
///
/// let policy = SchemePolicy::standard().with_scheme("S3");
/// assert!(policy.is_hierarchical("https"));
/// assert!(policy.is_hierarchical("s3"));
/// assert!(!policy.is_hierarchical("mailto"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePolicy {
    schemes: BTreeSet<String>,
}

impl SchemePolicy {
    /// The built-in policy: `http`, `https`, `ftp`, `ftps`, `ws`, `wss` and
    /// `file`.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_schemes(STANDARD_SCHEMES)
    }

    /// A policy holding exactly the given schemes.
    #[must_use]
    pub fn from_schemes<I>(schemes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            schemes: schemes
                .into_iter()
                .map(|scheme| scheme.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Add one hierarchical scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.schemes.insert(scheme.into().to_ascii_lowercase());
        self
    }

    /// Whether `scheme` is hierarchical. Comparison ignores ASCII case.
    #[must_use]
    pub fn is_hierarchical(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    /// The schemes, lowercased and sorted.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }
}

impl Default for SchemePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<&UrlConfig> for SchemePolicy {
    fn from(config: &UrlConfig) -> Self {
        let base = match &config.hierarchical_schemes {
            Some(schemes) => Self::from_schemes(schemes),
            None => Self::standard(),
        };

        config
            .extra_hierarchical_schemes
            .iter()
            .flatten()
            .fold(base, |policy, scheme| policy.with_scheme(scheme.as_str()))
    }
}
