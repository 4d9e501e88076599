//! Persisted spreadsheet selection.

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::config::{StateConfig, StorageManager};
use crate::domain::errors::BudgetError;
use crate::domain::ports::SpreadsheetRepositoryPort;

/// Spreadsheet repository backed by `state.toml`.
///
/// The state is read once on creation and written through on every change.
pub struct StateStore {
    storage: StorageManager,
    state: RwLock<StateConfig>,
}

impl StateStore {
    /// Loads the persisted state.
    ///
    /// An unreadable state file is logged and treated as empty.
    #[must_use]
    pub fn load(storage: StorageManager) -> Self {
        let state = storage.load_state().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load state, starting empty");
            StateConfig::default()
        });

        Self {
            storage,
            state: RwLock::new(state),
        }
    }
}

impl SpreadsheetRepositoryPort for StateStore {
    fn spreadsheet_id(&self) -> Option<String> {
        self.state.read().spreadsheet_id.clone()
    }

    fn set_spreadsheet_id(&self, id: Option<String>) -> Result<(), BudgetError> {
        let mut state = self.state.write();
        let next = StateConfig {
            spreadsheet_id: id,
            ..state.clone()
        };

        self.storage
            .save_state(&next)
            .map_err(|e| BudgetError::storage(e.to_string()))?;

        debug!(selected = next.spreadsheet_id.is_some(), "Spreadsheet selection saved");
        *state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_selection_survives_reload() {
        let dir = tempdir().unwrap();
        let store = StateStore::load(StorageManager::with_dir(dir.path().to_path_buf()));
        assert_eq!(store.spreadsheet_id(), None);

        store.set_spreadsheet_id(Some("sheet-7".to_string())).unwrap();

        let reloaded = StateStore::load(StorageManager::with_dir(dir.path().to_path_buf()));
        assert_eq!(reloaded.spreadsheet_id(), Some("sheet-7".to_string()));
    }

    #[test]
    fn test_clearing_selection_is_persisted() {
        let dir = tempdir().unwrap();
        let store = StateStore::load(StorageManager::with_dir(dir.path().to_path_buf()));
        store.set_spreadsheet_id(Some("sheet-7".to_string())).unwrap();

        store.set_spreadsheet_id(None).unwrap();

        let reloaded = StateStore::load(StorageManager::with_dir(dir.path().to_path_buf()));
        assert_eq!(reloaded.spreadsheet_id(), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_selection() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = StateStore::load(StorageManager::with_dir(blocker));

        let result = store.set_spreadsheet_id(Some("sheet-7".to_string()));

        assert!(matches!(result, Err(BudgetError::Storage { .. })));
        assert_eq!(store.spreadsheet_id(), None);
    }
}
