//! One-shot loading of the raw stops file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::error::StopsError;

/// Default location of the stops file, relative to the working directory.
pub const DEFAULT_STOPS_PATH: &str = "data/stops.txt";

/// Where the raw stop data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopSource {
    File(PathBuf),
    Url(String),
}

impl StopSource {
    /// Interpret `http://` and `https://` locations as URLs, anything else
    /// as a filesystem path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            StopSource::Url(location.to_string())
        } else {
            StopSource::File(PathBuf::from(location))
        }
    }
}

impl Default for StopSource {
    fn default() -> Self {
        StopSource::File(PathBuf::from(DEFAULT_STOPS_PATH))
    }
}

impl fmt::Display for StopSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSource::File(path) => write!(f, "{}", path.display()),
            StopSource::Url(url) => f.write_str(url),
        }
    }
}

/// Configuration for fetching stop data over HTTP.
#[derive(Debug, Clone)]
pub struct StopClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StopClientConfig {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }
}

impl Default for StopClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Read the whole stops file as text.
///
/// URLs are fetched with a single GET and no retry.
pub async fn load_stops_text(
    source: &StopSource,
    config: &StopClientConfig,
) -> Result<String, StopsError> {
    match source {
        StopSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| StopsError::Io {
                    path: path.clone(),
                    source,
                })
        }
        StopSource::Url(url) => fetch_url(url, config).await,
    }
}

async fn fetch_url(url: &str, config: &StopClientConfig) -> Result<String, StopsError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = http.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StopsError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}
