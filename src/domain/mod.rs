//! Domain layer with core budget entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Category, MonthType, MonthlyBudget, NewExpense};
pub use errors::BudgetError;
pub use ports::{
    BudgetDataPort, ClockPort, NavigatorPort, Route, SpreadsheetLauncherPort,
    SpreadsheetRepositoryPort,
};
