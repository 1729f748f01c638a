//! Configuration file loading.
//!
//! This module reads waypath configuration from YAML files or strings.

use crate::config::schema::UrlConfig;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration filename looked up by [`ConfigLoader::discover`].
pub const CONFIG_FILENAME: &str = "waypath.yaml";

/// A loaded configuration together with the file it came from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: UrlConfig,
}

/// Loads configuration from YAML sources.
///
/// # Examples
///
/// ```
/// use waypath::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("extra_hierarchical_schemes: [s3]").unwrap();
/// assert_eq!(config.extra_hierarchical_schemes, Some(vec!["s3".to_string()]));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
    /// [`Error::Configuration`](crate::Error::Configuration) if the YAML is
    /// invalid.
    pub fn load_file(path: &Path) -> Result<UrlConfig> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// YAML is invalid or names unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<UrlConfig> {
        if contents.trim().is_empty() {
            return Ok(UrlConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Look for `waypath.yaml`, walking up from `start_dir`.
    ///
    /// Stops at the first directory containing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }
}
