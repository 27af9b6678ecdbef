pub mod expense;
pub mod export;
pub mod filter;
pub mod sort;
pub mod summary;

pub use expense::{is_known_category, Expense, ExpenseId, NewExpense, KNOWN_CATEGORIES};
pub use export::{export_filename, CsvExporter, CsvImporter, ExportRow};
pub use filter::{filter, CategorySelection, ExpenseFilter, ExpenseQuery};
pub use sort::{sort, SortKey};
pub use summary::ExpenseSummary;
