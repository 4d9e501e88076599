//! Domain entity definitions.

mod expense;
mod month;
mod monthly_budget;

pub use expense::NewExpense;
pub use month::{MonthType, classify_month, month_of, next_month, prev_month};
pub use monthly_budget::{Category, MonthlyBudget};
