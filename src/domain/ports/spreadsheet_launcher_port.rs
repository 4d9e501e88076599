//! Spreadsheet launcher port definition.

/// Port for opening the budget spreadsheet outside the app.
#[cfg_attr(test, mockall::automock)]
pub trait SpreadsheetLauncherPort: Send + Sync {
    /// Opens the spreadsheet. Failures are not reported back.
    fn launch(&self);
}
