//! Category file sources: local checkout or remote raw URL.
//!
//! The generator reads v2fly `domain-list-community` data files by name.
//! When a local checkout is present (CI checks the repo out into
//! `community/`), files are read from disk; otherwise each file is fetched
//! from the GitHub raw URL.
//!
//! # Example
//!
//! ```ignore
//! use k2list::source::{CategorySource, RemoteSource};
//!
//! let source = RemoteSource::new();
//! let text = source.read("category-porn");
//! ```

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

/// Base raw URL of the v2fly domain-list-community data directory.
pub const BASE_RAW_URL: &str =
    "https://raw.githubusercontent.com/v2fly/domain-list-community/master/data";

/// Relative path of the local checkout's data directory.
pub const LOCAL_DATA_DIR: &str = "community/data";

/// Timeout for a single remote fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A provider of raw category file text by name.
///
/// Reading never fails: any error (missing file, network failure, timeout,
/// garbled encoding) is logged and yields an empty string, so a broken
/// source degrades to an empty category instead of aborting the run.
pub trait CategorySource {
    /// Read the raw text of the named category file.
    fn read(&self, name: &str) -> String;
}

/// Reads category files from a local checkout directory.
pub struct LocalSource {
    base_dir: PathBuf,
}

impl LocalSource {
    /// Create a source over the given data directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl CategorySource for LocalSource {
    fn read(&self, name: &str) -> String {
        let path = self.base_dir.join(name);
        if !path.is_file() {
            return String::new();
        }
        match self.read_file(&path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("failed to read {:?}: {}", path, e);
                String::new()
            }
        }
    }
}

/// Fetches category files from a raw-file HTTP endpoint.
pub struct RemoteSource {
    agent: ureq::Agent,
    base_url: String,
}

impl RemoteSource {
    /// Create a source over the fixed v2fly raw URL.
    pub fn new() -> Self {
        Self::with_base_url(BASE_RAW_URL)
    }

    /// Create a source over a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL being used.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, name: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| Error::Download(e.to_string()))?;

        // The dataset is UTF-8, but a garbled response must not abort the
        // run; decode lossily.
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Download(format!("failed to read response: {}", e)))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl CategorySource for RemoteSource {
    fn read(&self, name: &str) -> String {
        match self.fetch(name) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("failed to fetch {}/{}: {}", self.base_url, name, e);
                String::new()
            }
        }
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the source for this run, once at startup: the local checkout when
/// present, otherwise the remote raw URL.
pub fn detect_source() -> Box<dyn CategorySource> {
    let local_dir = Path::new(LOCAL_DATA_DIR);
    if local_dir.is_dir() {
        log::info!("using local community data at {:?}", local_dir);
        Box::new(LocalSource::new(local_dir))
    } else {
        log::info!("local community data not found, fetching remote files");
        Box::new(RemoteSource::new())
    }
}
