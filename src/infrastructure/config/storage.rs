use super::app_config::AppConfig;
use super::state_config::StateConfig;
use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "homebudget";
const APP_NAME: &str = "homebudget";
const CONFIG_FILE_NAME: &str = "config.toml";
const STATE_FILE_NAME: &str = "state.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reads and writes `config.toml` and `state.toml` in the config directory.
#[derive(Debug, Clone)]
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Creates a manager rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a manager rooted at `path`.
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the configuration, writing a default file when none exists.
    ///
    /// A file that fails to parse is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, creating default");
            let config = AppConfig::default();
            Self::save_to_file(&config_path, &config)?;
            return Ok(config);
        }

        Ok(Self::read_or_default(&config_path, "config")?)
    }

    /// Loads the persisted session state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read.
    pub fn load_state(&self) -> Result<StateConfig, ConfigError> {
        let state_path = self.state_path();

        if !state_path.exists() {
            debug!("No state file, starting with empty state");
            return Ok(StateConfig::default());
        }

        Ok(Self::read_or_default(&state_path, "state")?)
    }

    /// Persists the session state atomically.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_state(&self, state: &StateConfig) -> Result<(), ConfigError> {
        Self::save_to_file(&self.state_path(), state)
    }

    fn state_path(&self) -> PathBuf {
        self.config_dir.join(STATE_FILE_NAME)
    }

    fn read_or_default<T: DeserializeOwned + Default>(
        path: &Path,
        kind: &str,
    ) -> Result<T, std::io::Error> {
        let content = fs::read_to_string(path)?;
        match toml::from_str::<T>(&content) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(kind, error = %e, "Failed to parse file, using defaults");
                Ok(T::default())
            }
        }
    }

    fn save_to_file<T: Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("homebudget"));

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.request_timeout_secs, 30);

        let config_file = dir.path().join("homebudget").join(CONFIG_FILE_NAME);
        assert!(config_file.exists());
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "categories = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.categories.len(), 3);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "categories = [");
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "api_base_url = \"http://budget.local\"").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(config.api_base_url, "http://budget.local");
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load_state() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let state = StateConfig {
            spreadsheet_id: Some("sheet-42".to_string()),
        };
        manager.save_state(&state).unwrap();

        assert_eq!(manager.load_state().unwrap(), state);
    }

    #[test]
    fn test_missing_state_is_empty() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        assert_eq!(manager.load_state().unwrap(), StateConfig::default());
    }
}
