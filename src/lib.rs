pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use tracing::{debug, info};

pub use cli::convert::ConvertRequest;

/// Commands the application can execute after startup.
pub enum AppCommand {
    Convert(ConvertRequest),
    Currencies,
    Sync,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = providers::fixer::FixerProvider::new(config.fixer_base_url());
    let rates = store::rates::RateStore::new(config.rates_path()?);
    let prefs = store::prefs::PrefStore::new(config.defaults_path()?);

    match command {
        AppCommand::Convert(request) => cli::convert::run(&request, &rates, &prefs, &source).await,
        AppCommand::Currencies => cli::currencies::run(&rates, &source).await,
        AppCommand::Sync => cli::sync::run(&rates, &source).await,
    }
}
