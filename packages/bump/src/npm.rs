// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `package.json` version bump through `npm version`.

use std::process::Command;

use tracing::debug;

use crate::VersionWriter;
use crate::config::DEFAULT_NPM_PROGRAM;
use crate::error::{BumpError, Result};
use crate::version::Version;

/// Runs `npm version <version> --allow-same-version` in the working directory.
#[derive(Debug, Clone)]
pub struct NpmVersion {
    program: String,
}

impl Default for NpmVersion {
    fn default() -> Self {
        Self::new(DEFAULT_NPM_PROGRAM)
    }
}

impl NpmVersion {
    /// Use `program` instead of `npm`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command that sets the package version.
    #[must_use]
    pub fn command(&self, version: &Version) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("version")
            .arg(version.python_version())
            .arg("--allow-same-version");
        command
    }
}

impl VersionWriter for NpmVersion {
    fn name(&self) -> &str {
        "package.json"
    }

    fn write(&self, version: &Version) -> Result<()> {
        let mut command = self.command(version);
        debug!("Running {command:?}");

        let status = command.status().map_err(|source| BumpError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(BumpError::CommandFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}
