// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by every step of a version bump.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that abort a version bump.
#[derive(Debug, Error)]
pub enum BumpError {
    /// The version source could not be downloaded, or answered with a non-success status.
    #[error("failed to fetch version from {url}: {source}")]
    Fetch {
        /// Location of the version source
        url: String,
        /// Underlying transport or status error
        #[source]
        source: reqwest::Error,
    },

    /// The fetched text does not start with a `__version__` assignment.
    #[error("unable to parse __version__ string: {message}")]
    Parse {
        /// Description of what was found instead
        message: String,
    },

    /// A version was built from components that are not dotted-numeric.
    #[error("invalid version '{value}': {message}")]
    InvalidVersion {
        /// Offending component
        value: String,
        /// Which rule it violates
        message: String,
    },

    /// The external version command could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program that was looked up on `PATH`
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The external version command ran but did not succeed.
    #[error("`{program}` exited with {status}")]
    CommandFailed {
        /// Program that was invoked
        program: String,
        /// Exit status reported by the process
        status: ExitStatus,
    },

    /// A target file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for bump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
