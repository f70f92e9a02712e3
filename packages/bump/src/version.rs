// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Version value parsed from a Python `__version__` declaration.

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BumpError, Result};

/// `__version__ = "X.Y.Z"` or `__version__ = "X.Y.ZrcN"`, only at the very start of the text.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^__version__\s*=\s*"(?P<version>[0-9]+(?:\.[0-9]+)*)(?:rc(?P<candidate>[0-9]+))?""#)
        .expect("version pattern is valid")
});

/// Published version of a package, optionally a release candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    base: String,
    release_candidate: Option<String>,
}

impl Version {
    /// Create a version from a dotted-numeric base and an optional numeric release candidate.
    pub fn new(base: impl Into<String>, release_candidate: Option<String>) -> Result<Self> {
        let base = base.into();
        if !is_dotted_numeric(&base) {
            return Err(BumpError::InvalidVersion {
                value: base,
                message: "base must be dotted-numeric, e.g. 0.5.0".to_owned(),
            });
        }
        if let Some(candidate) = &release_candidate
            && !is_numeric(candidate)
        {
            return Err(BumpError::InvalidVersion {
                value: candidate.clone(),
                message: "release candidate must be numeric".to_owned(),
            });
        }
        Ok(Self {
            base,
            release_candidate,
        })
    }

    /// Parse the `__version__` assignment the text starts with.
    ///
    /// Anything after the closing quote is ignored, but nothing may precede the assignment.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = VERSION_PATTERN
            .captures(text)
            .ok_or_else(|| BumpError::Parse {
                message: format!(
                    "expected `__version__ = \"X.Y.Z\"` at the start, found {:?}",
                    text.lines().next().unwrap_or_default()
                ),
            })?;

        Ok(Self {
            base: captures["version"].to_owned(),
            release_candidate: captures.name("candidate").map(|m| m.as_str().to_owned()),
        })
    }

    /// Dotted-numeric part, e.g. `0.5.0`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Release candidate number, if any.
    #[must_use]
    pub fn release_candidate(&self) -> Option<&str> {
        self.release_candidate.as_deref()
    }

    /// Python rendering: `0.5.0rc1`, or `0.5.0` without a candidate.
    #[must_use]
    pub fn python_version(&self) -> String {
        match &self.release_candidate {
            Some(candidate) => format!("{}rc{candidate}", self.base),
            None => self.base.clone(),
        }
    }

    /// Node.js rendering: `0.5.0-1`, or `0.5.0` without a candidate.
    #[must_use]
    pub fn nodejs_version(&self) -> String {
        match &self.release_candidate {
            Some(candidate) => format!("{}-{candidate}", self.base),
            None => self.base.clone(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.python_version())
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_dotted_numeric(s: &str) -> bool {
    s.split('.').all(is_numeric)
}
