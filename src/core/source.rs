use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate provider returned HTTP {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to persist fetched rates: {0}")]
    Io(#[from] std::io::Error),
}

/// A remote source of exchange rates that can refresh the local cache file.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Downloads the latest published rates and writes the response body to
    /// `path`, overwriting any previous content.
    ///
    /// Returns the HTTP status of the exchange. The file is only touched on
    /// a 2xx response; on any other status it is left as-is.
    async fn sync(&self, path: &Path) -> Result<StatusCode, FetchError>;
}
