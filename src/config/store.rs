//! Reads and writes `settings.json`

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Settings;

const SETTINGS_FILE: &str = "settings.json";

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the settings file plus load/save
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the platform config directory
    /// (`~/.config/tripguide/settings.json` on Linux).
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("", "", "tripguide").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            path: dirs.config_dir().join(SETTINGS_FILE),
        })
    }

    /// Store at an explicit file path, used by `--config` and tests
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read(&self) -> Result<Option<Settings>, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(settings.sanitized()))
    }

    /// Loads settings, falling back to defaults when the file is missing or
    /// can't be read.
    pub fn load(&self) -> Settings {
        match self.read() {
            Ok(Some(settings)) => {
                tracing::info!(path = %self.path.display(), "settings loaded");
                settings
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring settings file, using defaults");
                Settings::default()
            }
        }
    }

    /// Writes settings as pretty JSON, creating the directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(settings).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PreferredTransport, TravelStyle};
    use crate::data::TransportMode;
    use tempfile::TempDir;

    fn create_test_store() -> (SettingsStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = SettingsStore::with_path(temp_dir.path().join("nested").join(SETTINGS_FILE));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.read().expect("missing file is not an error").is_none());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let (store, _temp_dir) = create_test_store();
        let mut settings = Settings {
            default_budget: 8000,
            default_days: 3,
            default_mode: TransportMode::Train,
            ..Settings::default()
        };
        settings.preferences.transport = PreferredTransport::Flight;
        settings.preferences.travel_style = TravelStyle::Family;

        store.save(&settings).expect("Save should succeed");
        assert!(store.path().exists(), "Settings file should exist");
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_saved_file_is_pretty_json() {
        let (store, _temp_dir) = create_test_store();
        store.save(&Settings::default()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"default_budget\": 5000"));
        assert!(content.contains("\"default_mode\": \"bus\""));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.read(), Err(ConfigError::Parse { .. })));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_out_of_range_defaults_are_adjusted_on_read() {
        let (store, _temp_dir) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"default_budget": 2300, "default_days": 20}"#).unwrap();

        let settings = store.load();
        assert_eq!(settings.default_budget, 2000);
        assert_eq!(settings.default_days, 14);
    }
}
