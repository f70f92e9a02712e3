// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in locations and names used when nothing is overridden.

/// Location of the most recent `werk24` client version.
pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/werk24/werk24-python/master/werk24/_version.py";

/// Requirements file rewritten with the new pin, relative to the working directory.
pub const DEFAULT_REQUIREMENTS_PATH: &str = "requirements.txt";

/// Python dependency pinned in the requirements file.
pub const DEFAULT_DEPENDENCY: &str = "werk24";

/// Program used to bump the `package.json` version.
pub const DEFAULT_NPM_PROGRAM: &str = "npm";
