// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retrieval of the text holding the published version.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::DEFAULT_VERSION_URL;
use crate::error::{BumpError, Result};

/// Anything that can hand over the raw `_version.py` text.
pub trait VersionSource {
    /// Return the full text of the version source.
    fn fetch(&self) -> Result<String>;
}

/// Version source downloaded over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_URL)
    }
}

impl HttpSource {
    /// Create a source reading from `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Location this source reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_error(&self, source: reqwest::Error) -> BumpError {
        BumpError::Fetch {
            url: self.url.clone(),
            source,
        }
    }
}

impl VersionSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        debug!("Fetching version from {}", self.url);

        self.client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| self.fetch_error(e))
    }
}
