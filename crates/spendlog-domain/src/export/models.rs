//! Export data models.

use crate::{Expense, NewExpense};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One CSV row. Ids are not exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

impl From<&Expense> for ExportRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date,
            category: expense.category.clone(),
            amount: expense.amount,
            description: expense.description.clone(),
        }
    }
}

impl From<ExportRow> for NewExpense {
    fn from(row: ExportRow) -> Self {
        Self {
            amount: row.amount,
            category: row.category,
            date: row.date,
            description: row.description,
        }
    }
}
