//! Domain error types.

mod budget_error;

pub use budget_error::BudgetError;
