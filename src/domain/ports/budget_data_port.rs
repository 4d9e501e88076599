//! Budget data service port definition.

use async_trait::async_trait;
use chrono::Month;

use crate::domain::entities::{MonthlyBudget, NewExpense};
use crate::domain::errors::BudgetError;

/// Port for the remote budget-data service.
#[async_trait]
pub trait BudgetDataPort: Send + Sync {
    /// Fetches the budget snapshot for `month` of the selected spreadsheet.
    async fn get_monthly_budget(&self, month: Month) -> Result<MonthlyBudget, BudgetError>;

    /// Appends an expense to the selected spreadsheet.
    async fn add_expense(&self, expense: NewExpense) -> Result<(), BudgetError>;

    /// Ends the remote session.
    async fn sign_out(&self) -> Result<(), BudgetError>;
}
