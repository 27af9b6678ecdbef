//! Expense sorting functionality.
//!
//! Each key has a fixed direction: newest and largest first, categories
//! alphabetical. All sorts are stable, so ties keep their incoming order.

use crate::Expense;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent date first.
    #[default]
    Date,
    /// Largest amount first.
    Amount,
    /// Category A to Z.
    Category,
}

impl SortKey {
    pub fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => b.date.cmp(&a.date),
            Self::Amount => b.amount.total_cmp(&a.amount),
            Self::Category => compare_labels(&a.category, &b.category),
        }
    }

    /// Sort a slice in place. Works with both `&Expense` and `Expense` elements.
    pub fn sort_by<T: Borrow<Expense>>(&self, expenses: &mut [T]) {
        expenses.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            other => Err(format!(
                "unknown sort key '{}', expected one of: date, amount, category",
                other
            )),
        }
    }
}

/// Case-insensitive ordering with a byte-wise tie-break, so "apple" and
/// "Banana" sort the way a reader expects.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `expenses`.
pub fn sort(expenses: &[Expense], key: SortKey) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    key.sort_by(&mut sorted);
    sorted
}
