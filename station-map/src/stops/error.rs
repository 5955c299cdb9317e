//! Stop data error types.

use std::path::PathBuf;

/// Errors that can occur while loading the raw stop data.
#[derive(Debug, thiserror::Error)]
pub enum StopsError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote returned an error status
    #[error("stop data request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Local file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A row excluded from the parsed output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct RowError {
    /// 1-based line number in the source text, header included.
    pub line: u64,
    pub reason: String,
}
