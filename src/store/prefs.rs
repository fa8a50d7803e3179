use super::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The user's default conversion pair, persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    pub base: String,
    pub target: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            base: "EUR".to_string(),
            target: "USD".to_string(),
        }
    }
}

/// Whole-document access to the preferences file. Every call opens, fully
/// reads or rewrites, and closes the file; there is no locking.
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored defaults, or `Preferences::default()` when nothing
    /// has been persisted yet.
    pub fn load(&self) -> Result<Preferences, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "No preferences file at {}, using defaults",
                    self.path.display()
                );
                return Ok(Preferences::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(prefs).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text)?;
        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    pub fn set_base(&self, code: &str) -> Result<(), StoreError> {
        let mut prefs = self.load()?;
        prefs.base = code.to_string();
        self.save(&prefs)
    }

    pub fn set_target(&self, code: &str) -> Result<(), StoreError> {
        let mut prefs = self.load()?;
        prefs.target = code.to_string();
        self.save(&prefs)
    }
}
