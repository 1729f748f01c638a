//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::UrlConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use waypath::config::{ConfigMerger, UrlConfig};
///
/// let low = UrlConfig {
///     hierarchical_schemes: Some(vec!["http".to_string()]),
///     ..Default::default()
/// };
/// let high = UrlConfig {
///     hierarchical_schemes: Some(vec!["https".to_string()]),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.hierarchical_schemes, Some(vec!["https".to_string()]));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[ConfigSource]) -> UrlConfig {
        let mut result = UrlConfig::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source wins).
    ///
    /// # Merging Rules
    ///
    /// - `hierarchical_schemes`: replaced if the source sets it
    /// - `extra_hierarchical_schemes`: accumulated, duplicates dropped
    pub fn merge_into(target: &mut UrlConfig, source: &UrlConfig) {
        if source.hierarchical_schemes.is_some() {
            target
                .hierarchical_schemes
                .clone_from(&source.hierarchical_schemes);
        }

        if let Some(ref extra) = source.extra_hierarchical_schemes {
            let existing = target.extra_hierarchical_schemes.get_or_insert_with(Vec::new);
            for scheme in extra {
                if !existing.contains(scheme) {
                    existing.push(scheme.clone());
                }
            }
        }
    }
}
