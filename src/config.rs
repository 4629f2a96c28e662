use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::scrapers::SearchParams;

/// What the crawl does when a single results page fails to load
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageErrorPolicy {
    /// Stop the whole run on the first failed page
    #[default]
    Abort,
    /// Log the failure and carry on with the next page
    Skip,
}

/// Everything a run needs. `Default` reproduces the stock Incruit search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchParams,
    pub output_path: PathBuf,
    pub on_page_error: PageErrorPolicy,
    /// Per-request timeout; `null` waits forever
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            output_path: PathBuf::from("jobs.csv"),
            on_page_error: PageErrorPolicy::Abort,
            request_timeout_secs: Some(30),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file. Keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ScrapeError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ScrapeError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|err| ScrapeError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
