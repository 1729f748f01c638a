//! Common test utilities for integration tests.
//!
//! This module provides short constructors and fixture helpers for testing
//! the waypath library.

use std::path::{Path, PathBuf};

use waypath::{AbsolutePath, FullPathUrl, RelativePath, RelativePathUrl, RootPathUrl};

/// Builds an absolute path, panicking on invalid input.
#[allow(dead_code)]
pub fn abs(path: &str) -> AbsolutePath {
    AbsolutePath::new(path).unwrap()
}

/// Builds a relative path, panicking on invalid input.
#[allow(dead_code)]
pub fn rel(path: &str) -> RelativePath {
    RelativePath::new(path).unwrap()
}

/// Builds a root URL path, panicking on invalid input.
#[allow(dead_code)]
pub fn root(url: &str) -> RootPathUrl {
    RootPathUrl::new(url).unwrap()
}

/// Builds a relative URL path, panicking on invalid input.
#[allow(dead_code)]
pub fn rel_url(url: &str) -> RelativePathUrl {
    RelativePathUrl::new(url).unwrap()
}

/// Builds a full URL, panicking on invalid input.
#[allow(dead_code)]
pub fn full(url: &str) -> FullPathUrl {
    FullPathUrl::new(url).unwrap()
}

/// Writes a configuration file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
