//! Screen navigation port definition.

use crate::domain::entities::MonthlyBudget;

/// Navigation targets reachable from the budget screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Expense entry screen, seeded with the budget currently shown.
    Transaction {
        monthly_budget: Option<MonthlyBudget>,
    },
    /// Spreadsheet picker.
    DocumentPicker,
    /// About screen.
    About,
    /// Load error dialog offering retry.
    LoadError,
}

impl Route {
    /// Returns short route name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transaction { .. } => "transaction",
            Self::DocumentPicker => "document_picker",
            Self::About => "about",
            Self::LoadError => "load_error",
        }
    }
}

/// Port for routing between screens.
pub trait NavigatorPort: Send + Sync {
    /// Shows the given route.
    fn navigate(&self, route: Route);

    /// Closes the current screen.
    fn pop_back_stack(&self);
}
