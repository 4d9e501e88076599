mod budget_data_port;
mod clock_port;
mod navigator_port;
mod spreadsheet_launcher_port;
mod spreadsheet_repository_port;

pub use budget_data_port::BudgetDataPort;
pub use clock_port::ClockPort;
pub use navigator_port::{NavigatorPort, Route};
pub use spreadsheet_launcher_port::SpreadsheetLauncherPort;
pub use spreadsheet_repository_port::SpreadsheetRepositoryPort;

#[cfg(test)]
pub mod mocks {
    pub use super::budget_data_port::mock::{
        MockBudgetData, MockBudgetDataHandle, PendingLoad, PendingSignOut,
    };
    pub use super::navigator_port::mock::{MockNavigator, NavigatorCall};
    pub use super::spreadsheet_launcher_port::MockSpreadsheetLauncherPort;
    pub use super::spreadsheet_repository_port::mock::MockSpreadsheetRepository;
}
