//! New expense record submitted to the budget service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense to be appended to the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Day the expense happened.
    pub date: NaiveDate,
    /// Target category name.
    pub category: String,
    /// Expense amount.
    pub value: Decimal,
}

impl NewExpense {
    /// Creates new expense record.
    #[must_use]
    pub fn new(date: NaiveDate, category: impl Into<String>, value: Decimal) -> Self {
        Self {
            date,
            category: category.into(),
            value,
        }
    }
}
