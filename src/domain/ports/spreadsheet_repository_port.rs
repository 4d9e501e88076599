//! Spreadsheet selection repository port definition.

use crate::domain::errors::BudgetError;

/// Port for the persisted spreadsheet selection.
pub trait SpreadsheetRepositoryPort: Send + Sync {
    /// Returns the selected spreadsheet id.
    fn spreadsheet_id(&self) -> Option<String>;

    /// Replaces the selected spreadsheet id; `None` clears it.
    ///
    /// # Errors
    /// Returns error if the selection cannot be persisted.
    fn set_spreadsheet_id(&self, id: Option<String>) -> Result<(), BudgetError>;
}
