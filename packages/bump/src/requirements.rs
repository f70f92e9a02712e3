// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requirements.txt` pin of the Python client.

use std::fs::write;
use std::path::{Path, PathBuf};

use crate::VersionWriter;
use crate::config::{DEFAULT_DEPENDENCY, DEFAULT_REQUIREMENTS_PATH};
use crate::error::{BumpError, Result};
use crate::version::Version;

/// Pins a single dependency to an exact version.
///
/// The file is replaced as a whole: it is expected to hold nothing but this one pin. Supporting
/// further requirements means merging into the existing lines instead of overwriting them.
#[derive(Debug, Clone)]
pub struct Requirements {
    path: PathBuf,
    dependency: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIREMENTS_PATH, DEFAULT_DEPENDENCY)
    }
}

impl Requirements {
    /// Pin `dependency` in the file at `path`.
    pub fn new(path: impl Into<PathBuf>, dependency: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dependency: dependency.into(),
        }
    }

    /// File that gets rewritten.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Requirement line for `version`, without a trailing newline.
    #[must_use]
    pub fn pin(&self, version: &Version) -> String {
        format!("{}=={}", self.dependency, version.python_version())
    }
}

impl VersionWriter for Requirements {
    fn name(&self) -> &str {
        "requirements"
    }

    fn write(&self, version: &Version) -> Result<()> {
        write(&self.path, self.pin(version)).map_err(|source| BumpError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
