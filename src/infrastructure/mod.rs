//! Infrastructure layer with external service adapters.

/// Budget-data service client.
pub mod budget_api;
/// Clock adapters.
pub mod clock;
/// Application configuration.
pub mod config;
/// Spreadsheet launcher.
pub mod spreadsheet_launcher;
/// Spreadsheet selection persistence.
pub mod state_store;

pub use budget_api::HttpBudgetClient;
pub use clock::{FixedClock, SystemClock};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use spreadsheet_launcher::BrowserSpreadsheetLauncher;
pub use state_store::StateStore;
