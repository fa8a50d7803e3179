use crate::core::source::{FetchError, RateSource};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fs;
use std::path::Path;
use tracing::debug;

// FixerProvider implementation for RateSource
pub struct FixerProvider {
    base_url: String,
}

impl FixerProvider {
    pub fn new(base_url: &str) -> Self {
        FixerProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateSource for FixerProvider {
    async fn sync(&self, path: &Path) -> Result<StatusCode, FetchError> {
        let url = format!("{}/latest", self.base_url);
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder().user_agent("fxr/1.0").build()?;
        let response = client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &body)?;
            debug!("Wrote {} bytes to {}", body.len(), path.display());
        } else {
            debug!(%status, "Rate provider returned an error status");
        }

        Ok(status)
    }
}
