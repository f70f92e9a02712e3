// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeps the local `werk24` client pins in step with the published Python package.
//!
//! A bump fetches the published `_version.py`, parses its `__version__` declaration and hands the
//! result to every [`VersionWriter`]: `npm version` for `package.json` and a single-line
//! `requirements.txt` pin.

use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod fetch;
pub mod npm;
pub mod requirements;
pub mod version;

pub use error::{BumpError, Result};
pub use fetch::{HttpSource, VersionSource};
pub use npm::NpmVersion;
pub use requirements::Requirements;
pub use version::Version;

/// Target that records a new version somewhere in the project.
pub trait VersionWriter {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Record `version`.
    fn write(&self, version: &Version) -> Result<()>;
}

/// Fetch and parse the current version, then pass it to each writer in order.
///
/// Stops at the first failure. Writers that already ran keep their changes.
pub fn bump(source: &dyn VersionSource, writers: &[&dyn VersionWriter]) -> Result<Version> {
    let text = source.fetch()?;
    let version = Version::parse(&text)?;
    debug!("Parsed version {version}");

    for writer in writers {
        writer.write(&version)?;
        info!("Updated {} to {version}", writer.name());
    }

    Ok(version)
}
