//! Expense filtering implementations.
//!
//! Provides the ExpenseFilter trait and the search and category filters
//! used by the expense list.

use super::expense_query::{CategorySelection, ExpenseQuery};
use crate::Expense;

/// Trait for filtering expenses by various criteria.
pub trait ExpenseFilter {
    /// Returns true if the expense matches the filter criteria.
    fn matches(&self, expense: &Expense) -> bool;
}

/// Case-insensitive search over category and description.
///
/// An empty term matches everything.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            needle: term.as_ref().to_lowercase(),
        }
    }
}

impl ExpenseFilter for SearchFilter {
    fn matches(&self, expense: &Expense) -> bool {
        expense.matches_term(&self.needle)
    }
}

/// Exact category match, or every category for `CategorySelection::All`.
pub struct CategoryFilter {
    selection: CategorySelection,
}

impl CategoryFilter {
    pub fn new(selection: CategorySelection) -> Self {
        Self { selection }
    }
}

impl ExpenseFilter for CategoryFilter {
    fn matches(&self, expense: &Expense) -> bool {
        match &self.selection {
            CategorySelection::All => true,
            CategorySelection::Only(category) => expense.category == *category,
        }
    }
}

/// Combine multiple filters with AND logic.
///
/// An expense matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn ExpenseFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all expenses).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn ExpenseFilter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ExpenseQuery> for CompositeFilter {
    fn from(query: &ExpenseQuery) -> Self {
        Self::new()
            .with_filter(Box::new(SearchFilter::new(&query.search)))
            .with_filter(Box::new(CategoryFilter::new(query.category.clone())))
    }
}

impl ExpenseFilter for CompositeFilter {
    fn matches(&self, expense: &Expense) -> bool {
        self.filters.iter().all(|f| f.matches(expense))
    }
}

/// Keep the expenses matching `query`, preserving their order.
pub fn filter(expenses: &[Expense], query: &ExpenseQuery) -> Vec<Expense> {
    let composite = CompositeFilter::from(query);
    expenses
        .iter()
        .filter(|e| composite.matches(e))
        .cloned()
        .collect()
}
