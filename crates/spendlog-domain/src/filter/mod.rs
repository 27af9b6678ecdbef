//! Expense filtering functionality.
//!
//! Provides traits and implementations for narrowing an expense list by
//! free-text search and category.

pub mod expense_filter;
pub mod expense_query;

pub use expense_filter::{filter, CategoryFilter, CompositeFilter, ExpenseFilter, SearchFilter};
pub use expense_query::{CategorySelection, ExpenseQuery};
