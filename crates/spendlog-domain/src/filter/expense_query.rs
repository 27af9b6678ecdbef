//! Expense list query settings.
//!
//! Holds what the user filters by, as opposed to the ExpenseFilter
//! implementations which perform the filtering.

use serde::{Deserialize, Serialize};

/// Category selection for the expense list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Parses user input. Only the exact string `all` selects everything;
    /// anything else, including other casings, is a category label.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub search: String,
    pub category: CategorySelection,
}

impl ExpenseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategorySelection) -> Self {
        self.category = category;
        self
    }
}
