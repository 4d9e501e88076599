//! Clock port definition.

use chrono::{Month, NaiveDate};

use crate::domain::entities::month_of;

/// Port supplying the current date.
pub trait ClockPort: Send + Sync {
    /// Returns today's date in the user's time zone.
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar month.
    fn current_month(&self) -> Month {
        month_of(self.today())
    }
}
