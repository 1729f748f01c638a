//! Configuration validation.
//!
//! Checks that every configured scheme is well-formed and that no
//! well-known opaque scheme is declared hierarchical.

use crate::config::schema::UrlConfig;
use crate::error::{Error, Result};

/// Schemes that never carry a hierarchical path.
pub const OPAQUE_SCHEMES: [&str; 7] = ["mailto", "data", "javascript", "tel", "urn", "about", "blob"];

/// Validates scheme configuration.
///
/// # Examples
///
/// ```
/// use waypath::config::{ConfigValidator, UrlConfig};
///
/// ConfigValidator::validate(&UrlConfig::default()).unwrap();
///
/// let bad = UrlConfig {
///     extra_hierarchical_schemes: Some(vec!["mailto".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &UrlConfig) -> Result<()> {
        if let Some(ref schemes) = config.hierarchical_schemes {
            if schemes.is_empty() {
                return Err(Error::Validation {
                    field: "hierarchical_schemes".into(),
                    message: "Must list at least one scheme".into(),
                });
            }
            Self::validate_schemes("hierarchical_schemes", schemes)?;
        }

        if let Some(ref schemes) = config.extra_hierarchical_schemes {
            Self::validate_schemes("extra_hierarchical_schemes", schemes)?;
        }

        Ok(())
    }

    fn validate_schemes(field: &str, schemes: &[String]) -> Result<()> {
        for scheme in schemes {
            Self::validate_scheme(field, scheme)?;
        }
        Ok(())
    }

    /// Validate one scheme name.
    ///
    /// A scheme is a letter followed by letters, digits, `+`, `-` or `.`.
    /// Case is ignored.
    fn validate_scheme(field: &str, scheme: &str) -> Result<()> {
        let lower = scheme.to_ascii_lowercase();
        let mut chars = lower.chars();

        let well_formed = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
        if !well_formed {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid scheme '{scheme}'"),
            });
        }

        if OPAQUE_SCHEMES.contains(&lower.as_str()) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Scheme '{scheme}' is never hierarchical"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extras(list: &[&str]) -> UrlConfig {
        UrlConfig {
            extra_hierarchical_schemes: Some(list.iter().map(|s| (*s).to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&UrlConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_schemes() {
        assert!(ConfigValidator::validate(&extras(&["s3", "git+ssh", "svn.x", "x-custom", "GS"])).is_ok());
    }

    #[test]
    fn test_malformed_schemes() {
        for bad in ["", "3d", "-x", "with space", "ü", "a:b", "a/b"] {
            let result = ConfigValidator::validate(&extras(&[bad]));
            assert!(
                matches!(result, Err(Error::Validation { ref field, .. }) if field == "extra_hierarchical_schemes"),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_opaque_schemes_rejected() {
        for scheme in OPAQUE_SCHEMES {
            assert!(ConfigValidator::validate(&extras(&[scheme])).is_err());
        }
        let err = ConfigValidator::validate(&extras(&["MailTo"])).unwrap_err();
        assert!(err.to_string().contains("never hierarchical"));
    }

    #[test]
    fn test_empty_replacement_list() {
        let config = UrlConfig {
            hierarchical_schemes: Some(Vec::new()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("hierarchical_schemes"));
    }

    #[test]
    fn test_empty_extras_allowed() {
        assert!(ConfigValidator::validate(&extras(&[])).is_ok());
    }
}
