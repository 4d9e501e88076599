//! User intents consumed by the action loops.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Intents emitted by the monthly budget screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    /// Screen became visible again.
    Resume,
    /// Pull-to-refresh.
    Refresh,
    /// Open the spreadsheet externally.
    OpenSpreadsheet,
    /// Show the previous month.
    SelectPrevMonth,
    /// Show the next month.
    SelectNextMonth,
    /// Retry after a load error.
    TryAgain,
    /// Open the expense entry screen.
    AddTransaction,
    /// Choose a different spreadsheet.
    PickDocumentAgain,
    /// Show the about screen.
    SelectAbout,
    /// Forget the spreadsheet and end the session.
    SignOut,
}

impl MainAction {
    /// Returns whether handling this action reloads the selected month.
    #[must_use]
    pub const fn triggers_load(self) -> bool {
        matches!(
            self,
            Self::Resume
                | Self::Refresh
                | Self::TryAgain
                | Self::SelectPrevMonth
                | Self::SelectNextMonth
        )
    }
}

/// Intents emitted by the expense entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewExpenseAction {
    /// Date picked.
    SelectDate(NaiveDate),
    /// Category picked.
    SelectCategory(String),
    /// Amount entered.
    SelectValue(Decimal),
    /// Submit the expense.
    SelectAdd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_triggering_actions() {
        assert!(MainAction::Resume.triggers_load());
        assert!(MainAction::SelectNextMonth.triggers_load());
        assert!(!MainAction::OpenSpreadsheet.triggers_load());
        assert!(!MainAction::AddTransaction.triggers_load());
        assert!(!MainAction::SignOut.triggers_load());
    }
}
