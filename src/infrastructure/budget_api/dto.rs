use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AddExpenseRequest<'a> {
    pub date: NaiveDate,
    pub category: &'a str,
    pub value: Decimal,
}
