use anyhow::Result;
use clap::{Parser, Subcommand};
use fxr::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Currency you are converting from
    #[arg(short, long)]
    base: Option<String>,

    /// Currency you're converting to
    #[arg(short, long)]
    target: Option<String>,

    /// Amount to convert
    #[arg(short, long, default_value_t = 1.0)]
    amount: f64,

    /// Persist the base currency as the new default
    #[arg(long)]
    set_base: bool,

    /// Persist the target currency as the new default
    #[arg(long)]
    set_target: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all known currency codes
    Currencies,
    /// Download the latest rates
    Sync,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxr::cli::setup::run(),
        Some(Commands::Currencies) => {
            fxr::run_command(fxr::AppCommand::Currencies, cli.config_path.as_deref()).await
        }
        Some(Commands::Sync) => {
            fxr::run_command(fxr::AppCommand::Sync, cli.config_path.as_deref()).await
        }
        None => {
            let request = fxr::ConvertRequest {
                base: cli.base,
                target: cli.target,
                amount: cli.amount,
                save_base: cli.set_base,
                save_target: cli.set_target,
            };
            fxr::run_command(fxr::AppCommand::Convert(request), cli.config_path.as_deref()).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
