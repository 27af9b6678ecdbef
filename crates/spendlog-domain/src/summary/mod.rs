//! Aggregate views over an expense list.

use crate::Expense;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use spendlog_core::PeriodScope;
use std::collections::{BTreeMap, HashSet};

/// Sum of all amounts; zero for an empty list.
pub fn total(expenses: &[Expense]) -> f64 {
    sum_amounts(expenses.iter())
}

// `Iterator::sum` over no floats yields -0.0; folding from 0.0 keeps the sign positive.
fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> f64 {
    expenses.fold(0.0, |acc, e| acc + e.amount)
}

/// Sum of amounts per category. Categories without expenses are absent.
pub fn by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Whether `date` falls in the same period as `reference`.
pub fn in_period(date: NaiveDate, reference: NaiveDate, scope: PeriodScope) -> bool {
    match scope {
        PeriodScope::MonthOfYear => date.month() == reference.month(),
        PeriodScope::CalendarMonth => {
            date.month() == reference.month() && date.year() == reference.year()
        }
    }
}

/// Total for the month of `reference`, comparing month of year only.
pub fn current_period(expenses: &[Expense], reference: NaiveDate) -> f64 {
    period_total(expenses, reference, PeriodScope::MonthOfYear)
}

pub fn period_total(expenses: &[Expense], reference: NaiveDate, scope: PeriodScope) -> f64 {
    sum_amounts(
        expenses
            .iter()
            .filter(|e| in_period(e.date, reference, scope)),
    )
}

/// Unique category labels in order of first appearance.
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    let mut seen = HashSet::new();
    expenses
        .iter()
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| e.category.clone())
        .collect()
}

/// Headline numbers for a list of expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
    pub current_period: f64,
    pub reference_date: NaiveDate,
    pub period_scope: PeriodScope,
    pub by_category: BTreeMap<String, f64>,
}

impl ExpenseSummary {
    pub fn compute(expenses: &[Expense], reference_date: NaiveDate, scope: PeriodScope) -> Self {
        Self {
            total: total(expenses),
            count: expenses.len(),
            current_period: period_total(expenses, reference_date, scope),
            reference_date,
            period_scope: scope,
            by_category: by_category(expenses),
        }
    }
}
