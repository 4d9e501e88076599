//! Clock adapters.

use chrono::{Local, NaiveDate};

use crate::domain::ports::ClockPort;

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates clock that always reports `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn test_fixed_clock_month() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap());
        assert_eq!(clock.current_month(), Month::April);
    }
}
