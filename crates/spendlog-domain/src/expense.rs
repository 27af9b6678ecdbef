use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendlog_core::{SpendlogError, SpendlogResult};
use std::fmt;
use uuid::Uuid;

/// Category labels offered when recording an expense.
///
/// Stored expenses may carry any non-empty label; this list only drives
/// suggestions and warnings.
pub const KNOWN_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Groceries",
    "Other",
];

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}

/// Opaque expense identifier.
///
/// New ids are UUID v4 strings. Older data may hold timestamp ids, which are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    /// Case-insensitive substring match against category and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_term(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.category.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// An expense as entered, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExpense {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the input and normalizes whitespace.
    ///
    /// Blank descriptions are dropped.
    pub fn validate(self) -> SpendlogResult<Self> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(SpendlogError::Validation(format!(
                "amount must be a positive number, got {}",
                self.amount
            )));
        }

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(SpendlogError::Validation(
                "category is required".to_string(),
            ));
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            amount: self.amount,
            category,
            date: self.date,
            description,
        })
    }

    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
        }
    }
}
