//! View state published by the action loops.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::domain::entities::{MonthType, MonthlyBudget};

/// Read side of the monthly budget screen state.
///
/// Only [`MainFlow`](crate::application::MainFlow) writes these fields.
#[derive(Debug, Clone)]
pub struct MainView {
    /// Position of the selected month in the year; `None` before the first load.
    pub month_type: watch::Receiver<Option<MonthType>>,
    /// Last loaded budget; `None` before the first load or after a failed one.
    pub monthly_budget: watch::Receiver<Option<MonthlyBudget>>,
    /// Whether a load is in flight.
    pub is_loading: watch::Receiver<bool>,
}

/// Expense entry form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpenseState {
    /// Date the expense will be booked on.
    pub selected_date: NaiveDate,
    /// Category the expense will be booked to.
    pub selected_category: String,
    /// Entered amount, if any.
    pub selected_value: Option<Decimal>,
}

impl NewExpenseState {
    /// Creates new form state.
    #[must_use]
    pub fn new(
        selected_date: NaiveDate,
        selected_category: impl Into<String>,
        selected_value: Option<Decimal>,
    ) -> Self {
        Self {
            selected_date,
            selected_category: selected_category.into(),
            selected_value,
        }
    }
}
