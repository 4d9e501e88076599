//! Budget service error types.

use thiserror::Error;

/// Budget error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum BudgetError {
    #[error("budget data service error: {message}")]
    DataService { message: String },

    #[error("no spreadsheet selected")]
    NotConfigured,

    #[error("failed to persist budget settings: {message}")]
    Storage { message: String },

    #[error("unexpected budget error: {message}")]
    Unexpected { message: String },
}

impl BudgetError {
    /// Creates data service error.
    #[must_use]
    pub fn data_service(message: impl Into<String>) -> Self {
        Self::DataService {
            message: message.into(),
        }
    }

    /// Creates storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether this is the load failure the budget screen recovers from.
    #[must_use]
    pub const fn is_data_service(&self) -> bool {
        matches!(self, Self::DataService { .. })
    }
}
