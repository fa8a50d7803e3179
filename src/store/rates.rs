use super::StoreError;
use crate::core::rates::RateTable;
use crate::core::source::{FetchError, RateSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cache-or-fetch access to the local rates file.
pub struct RateStore {
    path: PathBuf,
}

impl RateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached rate table, asking `source` to populate the file
    /// first when it does not exist yet. The read is retried exactly once
    /// after a fetch; a file that is still unreadable afterwards is an
    /// `Io` error.
    pub async fn load(&self, source: &dyn RateSource) -> Result<RateTable, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => {
                debug!("Rates cache HIT at {}", self.path.display());
                text
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Rates cache MISS at {}, fetching", self.path.display());
                let status = source.sync(&self.path).await?;
                if !status.is_success() {
                    return Err(FetchError::Status(status).into());
                }
                fs::read_to_string(&self.path)?
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tempfile::TempDir;

    const BODY: &str = r#"{"base": "EUR", "date": "2018-01-12", "rates": {"USD": 1.1}}"#;

    /// Test double that plays the remote source without any network.
    struct StubSource {
        status: StatusCode,
        body: Option<&'static str>,
    }

    #[async_trait]
    impl RateSource for StubSource {
        async fn sync(&self, path: &Path) -> Result<StatusCode, FetchError> {
            if self.status.is_success() {
                if let Some(body) = self.body {
                    fs::write(path, body)?;
                }
            }
            Ok(self.status)
        }
    }

    fn store_in(dir: &TempDir) -> RateStore {
        RateStore::new(dir.path().join("rates.json"))
    }

    #[tokio::test]
    async fn test_load_reads_existing_cache_without_fetching() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), BODY).unwrap();

        // A failing source proves the cache short-circuits the fetch.
        let source = StubSource {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: None,
        };
        let table = store.load(&source).await.unwrap();
        assert_eq!(table.base, "EUR");
        assert_eq!(table.rates["USD"], 1.1);
    }

    #[tokio::test]
    async fn test_load_fetches_when_cache_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let source = StubSource {
            status: StatusCode::OK,
            body: Some(BODY),
        };
        let table = store.load(&source).await.unwrap();
        assert_eq!(table.base, "EUR");
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_load_surfaces_non_success_status() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let source = StubSource {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: None,
        };
        let err = store.load(&source).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Fetch(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
        ));
    }

    #[tokio::test]
    async fn test_load_fails_when_file_is_unreadable_after_fetch() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        // Claims success but never writes the file.
        let source = StubSource {
            status: StatusCode::OK,
            body: None,
        };
        let err = store.load(&source).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        let source = StubSource {
            status: StatusCode::OK,
            body: None,
        };
        let err = store.load(&source).await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("rates.json"));
    }
}
