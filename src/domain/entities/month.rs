//! Calendar month arithmetic.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Position of a month within the calendar year.
///
/// Drives whether the previous/next month affordances are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthType {
    /// January.
    First,
    /// February through November.
    Middle,
    /// December.
    Last,
}

impl MonthType {
    /// Returns whether a previous month can be selected.
    #[must_use]
    pub const fn has_prev(self) -> bool {
        !matches!(self, Self::First)
    }

    /// Returns whether a next month can be selected.
    #[must_use]
    pub const fn has_next(self) -> bool {
        !matches!(self, Self::Last)
    }
}

impl std::fmt::Display for MonthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Middle => write!(f, "middle"),
            Self::Last => write!(f, "last"),
        }
    }
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Returns the calendar month of `date`.
#[must_use]
pub fn month_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

/// Classifies a month as the first, last, or a middle month of the year.
#[must_use]
pub const fn classify_month(month: Month) -> MonthType {
    match month {
        Month::January => MonthType::First,
        Month::December => MonthType::Last,
        _ => MonthType::Middle,
    }
}

/// Returns the month before `month`, wrapping January to December.
#[must_use]
pub fn prev_month(month: Month) -> Month {
    month.pred()
}

/// Returns the month after `month`, wrapping December to January.
#[must_use]
pub fn next_month(month: Month) -> Month {
    month.succ()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Month::January, MonthType::First ; "january")]
    #[test_case(Month::February, MonthType::Middle ; "february")]
    #[test_case(Month::March, MonthType::Middle ; "march")]
    #[test_case(Month::April, MonthType::Middle ; "april")]
    #[test_case(Month::May, MonthType::Middle ; "may")]
    #[test_case(Month::June, MonthType::Middle ; "june")]
    #[test_case(Month::July, MonthType::Middle ; "july")]
    #[test_case(Month::August, MonthType::Middle ; "august")]
    #[test_case(Month::September, MonthType::Middle ; "september")]
    #[test_case(Month::October, MonthType::Middle ; "october")]
    #[test_case(Month::November, MonthType::Middle ; "november")]
    #[test_case(Month::December, MonthType::Last ; "december")]
    fn test_classify_month(month: Month, expected: MonthType) {
        assert_eq!(classify_month(month), expected);
    }

    #[test]
    fn test_month_of_date() {
        let date = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
        assert_eq!(month_of(date), Month::April);
        let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        assert_eq!(month_of(date), Month::December);
    }

    #[test]
    fn test_month_steps_wrap_around_year() {
        assert_eq!(prev_month(Month::April), Month::March);
        assert_eq!(next_month(Month::March), Month::April);
        assert_eq!(prev_month(Month::January), Month::December);
        assert_eq!(next_month(Month::December), Month::January);
    }

    #[test]
    fn test_navigation_affordances() {
        assert!(!MonthType::First.has_prev());
        assert!(MonthType::First.has_next());
        assert!(MonthType::Middle.has_prev() && MonthType::Middle.has_next());
        assert!(!MonthType::Last.has_next());
    }
}
