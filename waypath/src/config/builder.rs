//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::{SchemePolicy, UrlConfig};
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds a [`SchemePolicy`] from files, the environment and overrides.
///
/// Layers apply in this order, later ones winning:
///
/// 1. `waypath.yaml` discovered from the working directory
/// 2. Files added with [`with_file`](Self::with_file), in call order
/// 3. `WAYPATH_*` environment variables
/// 4. Programmatic configs added with [`with_config`](Self::with_config)
///
/// # Examples
///
/// ```
/// use waypath::config::{ConfigBuilder, UrlConfig};
///
/// let policy = ConfigBuilder::new()
///     .skip_env()
///     .with_config(UrlConfig {
///         extra_hierarchical_schemes: Some(vec!["s3".to_string()]),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert!(policy.is_hierarchical("s3"));
/// assert!(policy.is_hierarchical("https"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    skip_env: bool,
    overrides: Vec<UrlConfig>,
}

impl ConfigBuilder {
    /// A builder with no sources; building it yields the standard policy
    /// plus any environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover `waypath.yaml` by walking up from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load an explicit configuration file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Ignore `WAYPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer a programmatic configuration on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: UrlConfig) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all layers into a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, if an
    /// environment variable is malformed, or if the merged result fails
    /// validation.
    pub fn build_config(&self) -> Result<UrlConfig> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if let Some(ref dir) = self.working_dir {
            sources.extend(ConfigLoader::discover(dir)?);
        }

        for path in &self.files {
            sources.push(ConfigSource {
                path: path.clone(),
                config: ConfigLoader::load_file(path)?,
            });
        }

        log::debug!("merging {} configuration source(s)", sources.len());
        let mut config = ConfigMerger::merge(&sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for override_config in &self.overrides {
            ConfigMerger::merge_into(&mut config, override_config);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build the scheme policy.
    ///
    /// # Errors
    ///
    /// See [`build_config`](Self::build_config).
    pub fn build(&self) -> Result<SchemePolicy> {
        let config = self.build_config()?;
        Ok(SchemePolicy::from(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_builder_is_standard() {
        let policy = ConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(policy, SchemePolicy::standard());
    }

    #[test]
    fn test_files_apply_in_order() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.yaml");
        let second = temp.path().join("second.yaml");
        fs::write(&first, "hierarchical_schemes: [http]\nextra_hierarchical_schemes: [git]\n").unwrap();
        fs::write(&second, "hierarchical_schemes: [https]\n").unwrap();

        let policy = ConfigBuilder::new()
            .with_file(&first)
            .with_file(&second)
            .skip_env()
            .build()
            .unwrap();

        assert!(policy.is_hierarchical("https"));
        assert!(policy.is_hierarchical("git"));
        assert!(!policy.is_hierarchical("http"));
    }

    #[test]
    fn test_override_beats_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("waypath.yaml");
        fs::write(&file, "hierarchical_schemes: [http]\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(&file)
            .skip_env()
            .with_config(UrlConfig {
                hierarchical_schemes: Some(vec!["ftp".into()]),
                ..Default::default()
            })
            .build_config()
            .unwrap();

        assert_eq!(config.hierarchical_schemes, Some(vec!["ftp".to_string()]));
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_env()
            .with_config(UrlConfig {
                extra_hierarchical_schemes: Some(vec!["javascript".into()]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .with_file(temp.path().join("absent.yaml"))
            .skip_env()
            .build();
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
