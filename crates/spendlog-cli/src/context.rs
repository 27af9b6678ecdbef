use chrono::NaiveDate;
use spendlog_core::{AppConfig, PeriodScope, SpendlogResult};
use spendlog_domain::{
    filter, sort, summary, Expense, ExpenseId, ExpenseQuery, ExpenseSummary,
    ExportRow, NewExpense, SortKey,
};
use spendlog_persistence::{ExpenseStore, JsonFileStorage};
use std::path::Path;

pub struct CliContext {
    pub config: AppConfig,
    store: ExpenseStore<JsonFileStorage>,
}

impl CliContext {
    pub fn load(file_path: &Path, config: AppConfig) -> Self {
        let store = ExpenseStore::open(JsonFileStorage::new(file_path));
        Self { config, store }
    }

    pub fn expenses(&self) -> &[Expense] {
        self.store.expenses()
    }

    pub fn add_expense(&mut self, input: NewExpense) -> SpendlogResult<Expense> {
        self.store.add(input)
    }

    pub fn delete_expense(&mut self, id: &ExpenseId) -> SpendlogResult<bool> {
        self.store.delete(id)
    }

    pub fn default_sort(&self) -> SortKey {
        let configured = self.config.effective_default_sort();
        configured.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring configured default_sort: {}", e);
            SortKey::default()
        })
    }

    /// Filtered then sorted view of the expenses.
    pub fn view(&self, query: &ExpenseQuery, key: Option<SortKey>) -> Vec<Expense> {
        let filtered = filter(self.expenses(), query);
        sort(&filtered, key.unwrap_or_else(|| self.default_sort()))
    }

    pub fn summary(&self, reference: NaiveDate, calendar_month: bool) -> ExpenseSummary {
        let scope = if calendar_month {
            PeriodScope::CalendarMonth
        } else {
            self.config.period_scope
        };
        ExpenseSummary::compute(self.expenses(), reference, scope)
    }

    pub fn categories(&self) -> Vec<String> {
        summary::distinct_categories(self.expenses())
    }

    /// Add each row as a new expense. Rows are added last to first so the
    /// list keeps the file's order at the top.
    ///
    /// Every row is validated before the first one is stored.
    pub fn import_rows(&mut self, rows: Vec<ExportRow>) -> SpendlogResult<Vec<Expense>> {
        let inputs = rows
            .into_iter()
            .map(|row| NewExpense::from(row).validate())
            .collect::<SpendlogResult<Vec<_>>>()?;

        let mut imported = Vec::with_capacity(inputs.len());
        for input in inputs.into_iter().rev() {
            imported.push(self.store.add(input)?);
        }
        imported.reverse();
        Ok(imported)
    }
}
