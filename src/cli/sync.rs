use super::ui;
use crate::core::source::{FetchError, RateSource};
use crate::store::rates::RateStore;
use anyhow::Result;
use console::style;

/// Forces a re-download of the rate table, replacing the cache file.
pub async fn run(rates: &RateStore, source: &dyn RateSource) -> Result<()> {
    let pb = ui::new_spinner("Fetching latest rates...");
    let status = source.sync(rates.path()).await;
    pb.finish_and_clear();

    let status = status?;
    if !status.is_success() {
        return Err(FetchError::Status(status).into());
    }

    println!("{}", style("New rates have been saved.").green());
    Ok(())
}
