//! Data transfer objects for the application layer.

mod actions;
mod view_state;

pub use actions::{MainAction, NewExpenseAction};
pub use view_state::{MainView, NewExpenseState};
