//! Action loops, one per screen.

mod main_flow;
mod new_expense_flow;

pub use main_flow::MainFlow;
pub use new_expense_flow::NewExpenseFlow;
