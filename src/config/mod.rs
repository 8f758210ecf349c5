//! Data-directory resolution and the small persisted settings file.

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{env, fs, io, path::Path, path::PathBuf};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".billbuddy";
const SETTINGS_FILE: &str = "settings.json";

/// Returns the application data directory, defaulting to `~/.billbuddy`.
/// `BILLBUDDY_HOME` overrides the location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BILLBUDDY_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates the directory (and parents) when absent.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// User preferences that persist across sessions, separate from the four
/// record collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub notifications_enabled: bool,
}

impl Settings {
    /// Loads settings from the data directory, falling back to defaults when
    /// the file is absent or unreadable.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|err| {
                tracing::warn!(%err, "unreadable settings file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<(), LedgerError> {
        ensure_dir(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(SETTINGS_FILE), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_roundtrip() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            notifications_enabled: true,
        };
        settings.save(temp.path()).unwrap();
        let loaded = Settings::load(temp.path());
        assert!(loaded.notifications_enabled);
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = Settings::load(temp.path());
        assert!(!loaded.notifications_enabled);
    }
}
