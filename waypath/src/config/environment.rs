//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `WAYPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::UrlConfig;
use crate::error::{Error, Result};
use std::env;

/// Replaces the hierarchical scheme list.
pub const HIERARCHICAL_SCHEMES_VAR: &str = "WAYPATH_HIERARCHICAL_SCHEMES";

/// Extends the hierarchical scheme list.
pub const EXTRA_SCHEMES_VAR: &str = "WAYPATH_EXTRA_SCHEMES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use waypath::config::{EnvironmentConfig, UrlConfig};
///
/// let mut config = UrlConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `WAYPATH_HIERARCHICAL_SCHEMES` replaces the scheme list and
    /// `WAYPATH_EXTRA_SCHEMES` adds to the extras. Both are comma-separated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `WAYPATH_HIERARCHICAL_SCHEMES` is set
    /// but names no scheme.
    pub fn apply_overrides(config: &mut UrlConfig) -> Result<()> {
        Self::apply_with(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    pub(crate) fn apply_with<F>(config: &mut UrlConfig, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(HIERARCHICAL_SCHEMES_VAR) {
            let schemes = Self::parse_list(&value);
            if schemes.is_empty() {
                return Err(Error::Validation {
                    field: HIERARCHICAL_SCHEMES_VAR.into(),
                    message: "Must list at least one scheme".into(),
                });
            }
            log::debug!("{HIERARCHICAL_SCHEMES_VAR} overrides hierarchical schemes");
            config.hierarchical_schemes = Some(schemes);
        }

        if let Some(value) = lookup(EXTRA_SCHEMES_VAR) {
            let extra = Self::parse_list(&value);
            match &mut config.extra_hierarchical_schemes {
                Some(existing) => existing.extend(extra),
                None => config.extra_hierarchical_schemes = Some(extra),
            }
        }

        Ok(())
    }

    /// Split a comma-separated list, dropping blanks.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
