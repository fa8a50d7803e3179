use crate::core::rates::normalize;
use crate::core::source::RateSource;
use crate::store::prefs::PrefStore;
use crate::store::rates::RateStore;
use anyhow::Result;
use console::style;

/// A single conversion request as given on the command line. Unset
/// currencies fall back to the persisted defaults.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub base: Option<String>,
    pub target: Option<String>,
    pub amount: f64,
    pub save_base: bool,
    pub save_target: bool,
}

pub async fn run(
    request: &ConvertRequest,
    rates: &RateStore,
    prefs: &PrefStore,
    source: &dyn RateSource,
) -> Result<()> {
    let defaults = prefs.load()?;
    let base = normalize(request.base.as_deref().unwrap_or(&defaults.base));
    let target = normalize(request.target.as_deref().unwrap_or(&defaults.target));

    let table = rates.load(source).await?;
    let result = table.convert(&base, &target, request.amount)?;

    // New defaults are persisted only once the codes proved convertible.
    if request.save_base {
        prefs.set_base(&base)?;
    }
    if request.save_target {
        prefs.set_target(&target)?;
    }

    println!(
        "{} {} = {} {}",
        request.amount,
        base,
        style(format!("{result:.2}")).green().bold(),
        target
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::FetchError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const BODY: &str = r#"{"base": "EUR", "rates": {"USD": 1.1, "GBP": 0.9}}"#;

    struct StubSource;

    #[async_trait]
    impl RateSource for StubSource {
        async fn sync(&self, path: &Path) -> Result<StatusCode, FetchError> {
            fs::write(path, BODY)?;
            Ok(StatusCode::OK)
        }
    }

    fn request(base: Option<&str>, target: Option<&str>) -> ConvertRequest {
        ConvertRequest {
            base: base.map(String::from),
            target: target.map(String::from),
            amount: 10.0,
            save_base: false,
            save_target: false,
        }
    }

    fn stores_in(dir: &TempDir) -> (RateStore, PrefStore) {
        (
            RateStore::new(dir.path().join("rates.json")),
            PrefStore::new(dir.path().join("defaults.json")),
        )
    }

    #[tokio::test]
    async fn test_run_converts_with_explicit_currencies() {
        let dir = TempDir::new().unwrap();
        let (rates, prefs) = stores_in(&dir);

        let result = run(&request(Some("eur"), Some("usd")), &rates, &prefs, &StubSource).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_falls_back_to_stored_defaults() {
        let dir = TempDir::new().unwrap();
        let (rates, prefs) = stores_in(&dir);

        // No arguments: EUR -> USD from Preferences::default().
        let result = run(&request(None, None), &rates, &prefs, &StubSource).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_currency() {
        let dir = TempDir::new().unwrap();
        let (rates, prefs) = stores_in(&dir);

        let err = run(&request(Some("EUR"), Some("XYZ")), &rates, &prefs, &StubSource)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }

    #[tokio::test]
    async fn test_run_persists_new_defaults_on_request() {
        let dir = TempDir::new().unwrap();
        let (rates, prefs) = stores_in(&dir);

        let mut req = request(Some("gbp"), Some("usd"));
        req.save_base = true;
        req.save_target = true;
        run(&req, &rates, &prefs, &StubSource).await.unwrap();

        let saved = prefs.load().unwrap();
        assert_eq!(saved.base, "GBP");
        assert_eq!(saved.target, "USD");
    }

    #[tokio::test]
    async fn test_run_does_not_persist_defaults_on_failure() {
        let dir = TempDir::new().unwrap();
        let (rates, prefs) = stores_in(&dir);

        let mut req = request(Some("XYZ"), Some("USD"));
        req.save_base = true;
        assert!(run(&req, &rates, &prefs, &StubSource).await.is_err());

        // The preferences file was never written.
        assert!(!prefs.path().exists());
    }
}
