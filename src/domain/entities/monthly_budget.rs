//! Monthly budget snapshot entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget category with planned and actual amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name as shown in the spreadsheet.
    pub name: String,
    /// Planned amount.
    pub planned: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Nested sub-categories, in spreadsheet order.
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    /// Creates a leaf category.
    #[must_use]
    pub fn new(name: impl Into<String>, planned: Decimal, actual: Decimal) -> Self {
        Self {
            name: name.into(),
            planned,
            actual,
            subcategories: Vec::new(),
        }
    }

    /// Sets the nested sub-categories.
    #[must_use]
    pub fn with_subcategories(mut self, subcategories: Vec<Category>) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Returns whether the actual amount exceeds the planned one.
    #[must_use]
    pub fn is_over_plan(&self) -> bool {
        self.actual > self.planned
    }
}

/// Immutable planned/actual snapshot for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Planned income total.
    pub planned_income: Decimal,
    /// Planned expense total.
    pub planned_expense: Decimal,
    /// Actual income total.
    pub actual_income: Decimal,
    /// Actual expense total.
    pub actual_expense: Decimal,
    /// Top-level categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl MonthlyBudget {
    /// Planned income minus planned expense.
    #[must_use]
    pub fn planned_balance(&self) -> Decimal {
        self.planned_income - self.planned_expense
    }

    /// Actual income minus actual expense.
    #[must_use]
    pub fn actual_balance(&self) -> Decimal {
        self.actual_income - self.actual_expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balances() {
        let budget = MonthlyBudget {
            planned_income: Decimal::new(5000, 0),
            planned_expense: Decimal::new(420_050, 2),
            actual_income: Decimal::new(5100, 0),
            actual_expense: Decimal::new(4300, 0),
            categories: Vec::new(),
        };

        assert_eq!(budget.planned_balance(), Decimal::new(79_950, 2));
        assert_eq!(budget.actual_balance(), Decimal::new(800, 0));
    }

    #[test]
    fn test_deserialize_nested_categories() {
        let json = r#"{
            "planned_income": "3000",
            "planned_expense": "2500",
            "actual_income": "3000",
            "actual_expense": "1200.40",
            "categories": [
                {
                    "name": "Jedzenie",
                    "planned": "800",
                    "actual": "912.10",
                    "subcategories": [
                        { "name": "Jedzenie dom", "planned": "600", "actual": "700" }
                    ]
                }
            ]
        }"#;

        let budget: MonthlyBudget = serde_json::from_str(json).unwrap();

        assert_eq!(budget.actual_expense, Decimal::new(120_040, 2));
        assert_eq!(budget.categories.len(), 1);
        assert!(budget.categories[0].is_over_plan());
        assert_eq!(budget.categories[0].subcategories[0].name, "Jedzenie dom");
        assert!(budget.categories[0].subcategories[0].subcategories.is_empty());
    }
}
