use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

// Written out by `fxr setup` as a starting point.
const EXAMPLE_CONFIG: &str = r#"---
# Example configuration file for fxr
providers:
  fixer:
    base_url: "http://api.fixer.io"

# Directory holding rates.json and defaults.json. Defaults to the platform
# data directory when omitted.
# data_path: "/home/user/.local/share/fxr"
"#;

/// Creates a default configuration file with example content at the default location
pub fn run() -> Result<()> {
    setup_at_path(AppConfig::default_config_path()?)
}

/// Creates a default configuration file with example content at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
