//! Plain-text rendering of view state.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::application::dto::NewExpenseState;
use crate::domain::entities::{Category, MonthType, MonthlyBudget};

const INDENT: &str = "  ";

/// Renders the month navigation hints for the selected month.
#[must_use]
pub fn month_header(month_type: Option<MonthType>) -> String {
    let Some(month_type) = month_type else {
        return "Monthly budget".to_string();
    };

    let prev = if month_type.has_prev() { "< prev" } else { "      " };
    let next = if month_type.has_next() { "next >" } else { "" };
    format!("{prev}  Monthly budget  {next}").trim_end().to_string()
}

/// Renders totals, balances and the category tree.
#[must_use]
pub fn budget_summary(budget: &MonthlyBudget) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12}{:>12}{:>12}", "", "planned", "actual");
    let _ = writeln!(
        out,
        "{:<12}{:>12}{:>12}",
        "Income",
        amount(budget.planned_income),
        amount(budget.actual_income)
    );
    let _ = writeln!(
        out,
        "{:<12}{:>12}{:>12}",
        "Expenses",
        amount(budget.planned_expense),
        amount(budget.actual_expense)
    );
    let _ = writeln!(
        out,
        "{:<12}{:>12}{:>12}",
        "Balance",
        amount(budget.planned_balance()),
        amount(budget.actual_balance())
    );

    if !budget.categories.is_empty() {
        out.push('\n');
        for category in &budget.categories {
            write_category(&mut out, category, 0);
        }
    }

    out
}

fn write_category(out: &mut String, category: &Category, depth: usize) {
    let marker = if category.is_over_plan() { " !" } else { "" };
    let _ = writeln!(
        out,
        "{}{}: {} / {}{marker}",
        INDENT.repeat(depth),
        category.name,
        amount(category.actual),
        amount(category.planned)
    );
    for sub in &category.subcategories {
        write_category(out, sub, depth + 1);
    }
}

/// Renders the expense entry form.
#[must_use]
pub fn expense_form(state: &NewExpenseState, categories: &[String]) -> String {
    let value = state
        .selected_value
        .map_or_else(|| "-".to_string(), amount);

    let mut out = String::new();
    let _ = writeln!(out, "Date:      {}", state.selected_date.format("%Y-%m-%d"));
    let _ = writeln!(out, "Category:  {}", state.selected_category);
    let _ = writeln!(out, "Value:     {value}");
    if !categories.is_empty() {
        let _ = writeln!(out, "Available: {}", categories.join(", "));
    }
    out
}

/// Renders `(usage, description)` pairs as an aligned list.
#[must_use]
pub fn help_text(entries: &[(&str, &str)]) -> String {
    let width = entries.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(usage, description)| format!("{INDENT}{usage:<width$}  {description}\n"))
        .collect()
}

fn amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn budget() -> MonthlyBudget {
        MonthlyBudget {
            planned_income: Decimal::new(5000, 0),
            planned_expense: Decimal::new(4000, 0),
            actual_income: Decimal::new(5200, 0),
            actual_expense: Decimal::new(4150_5, 1),
            categories: vec![
                Category::new("Jedzenie", Decimal::new(1200, 0), Decimal::new(1300, 0))
                    .with_subcategories(vec![Category::new(
                        "Restauracje",
                        Decimal::new(200, 0),
                        Decimal::new(150, 0),
                    )]),
                Category::new("Transport", Decimal::new(300, 0), Decimal::new(120, 0)),
            ],
        }
    }

    #[test_case(None, "Monthly budget" ; "unknown")]
    #[test_case(Some(MonthType::First), "        Monthly budget  next >" ; "first")]
    #[test_case(Some(MonthType::Middle), "< prev  Monthly budget  next >" ; "middle")]
    #[test_case(Some(MonthType::Last), "< prev  Monthly budget" ; "last")]
    fn test_month_header(month_type: Option<MonthType>, expected: &str) {
        assert_eq!(month_header(month_type), expected);
    }

    #[test]
    fn test_budget_summary_totals() {
        let summary = budget_summary(&budget());

        assert!(summary.contains("Income"));
        assert!(summary.contains("5000.00"));
        assert!(summary.contains("4150.50"));
        assert!(summary.contains("1049.50"));
    }

    #[test]
    fn test_budget_summary_nests_categories() {
        let summary = budget_summary(&budget());

        assert!(summary.contains("Jedzenie: 1300.00 / 1200.00 !\n"));
        assert!(summary.contains("\n  Restauracje: 150.00 / 200.00\n"));
        assert!(summary.contains("Transport: 120.00 / 300.00\n"));
    }

    #[test]
    fn test_expense_form() {
        let state = NewExpenseState::new(
            NaiveDate::from_ymd_opt(2020, 6, 9).unwrap(),
            "Hobby",
            Some(Decimal::new(125, 1)),
        );

        let form = expense_form(&state, &["Hobby".to_string(), "Transport".to_string()]);

        assert!(form.contains("Date:      2020-06-09"));
        assert!(form.contains("Category:  Hobby"));
        assert!(form.contains("Value:     12.50"));
        assert!(form.contains("Available: Hobby, Transport"));
    }

    #[test]
    fn test_expense_form_without_value() {
        let state = NewExpenseState::new(NaiveDate::from_ymd_opt(2020, 6, 9).unwrap(), "", None);

        assert!(expense_form(&state, &[]).contains("Value:     -"));
    }

    #[test]
    fn test_help_text_aligns_descriptions() {
        let text = help_text(&[("a", "first"), ("long", "second")]);

        assert_eq!(text, "  a     first\n  long  second\n");
    }
}
