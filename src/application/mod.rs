//! Application layer with action loops and their DTOs.

/// Data transfer objects.
pub mod dto;
/// Action loops driving the budget screens.
pub mod flows;

pub use dto::{MainAction, MainView, NewExpenseAction, NewExpenseState};
pub use flows::{MainFlow, NewExpenseFlow};
